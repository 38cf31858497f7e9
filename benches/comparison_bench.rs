use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{Cell, DijkstraSolver, GridModel, GridSolver, PathSearch};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N: usize = 64;
const N_SCENARIOS: usize = 100;

fn random_grid(rng: &mut StdRng) -> GridModel {
    let rows = (0..N)
        .map(|_| (0..N).map(|_| !rng.gen_bool(0.25)).collect())
        .collect::<Vec<Vec<bool>>>();
    GridModel::from_passability(rows).expect("rows are rectangular")
}

/// Random passable start/goal pairs that lie on the same component.
fn random_scenarios(grid: &GridModel, rng: &mut StdRng) -> Vec<(Cell, Cell)> {
    let mut random_cell = || Cell::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
    let mut scenarios = Vec::with_capacity(N_SCENARIOS);
    while scenarios.len() < N_SCENARIOS {
        let (start, goal) = (random_cell(), random_cell());
        if grid.reachable(start, goal) {
            scenarios.push((start, goal));
        }
    }
    scenarios
}

fn bench_solver<S: GridSolver>(
    c: &mut Criterion,
    solver_name: &str,
    solver: &S,
    grid: &GridModel,
    scenarios: &[(Cell, Cell)],
) {
    c.bench_function(format!("random {N}x{N}, {solver_name}").as_str(), |b| {
        b.iter(|| {
            for (start, goal) in scenarios {
                black_box(solver.find_path(*start, *goal, grid).ok());
            }
        })
    });
}

fn comparison_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let grid = random_grid(&mut rng);
    let scenarios = random_scenarios(&grid, &mut rng);
    bench_solver(c, "A*", &PathSearch::new(), &grid, &scenarios);
    bench_solver(
        c,
        "weighted A* (1.5)",
        &PathSearch::with_heuristic_factor(1.5).expect("valid factor"),
        &grid,
        &scenarios,
    );
    bench_solver(c, "Dijkstra", &DijkstraSolver, &grid, &scenarios);
}

criterion_group!(benches, comparison_bench);
criterion_main!(benches);
