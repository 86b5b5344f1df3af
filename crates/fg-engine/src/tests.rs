use fg_core::{ColorIndex, GrowthConfig, ModelKind, RngAlgorithm, SeedPolicy, WalkerRng};

use crate::engine::Engine;
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::model::{Forest, GrowthModel, Model, Neuron, Tree};
use crate::observer::{GrowthObserver, NoopObserver, Progress};
use crate::step::{StepSet, Walker};

/// Small reproducible configuration for engine tests.
fn test_config(model: ModelKind, width: u32, height: u32, threads: u32) -> GrowthConfig {
    GrowthConfig {
        width,
        length: width,
        height,
        threads,
        animate: false,
        model,
        seed_policy: SeedPolicy::Fixed,
        seed: 7,
        ..GrowthConfig::default()
    }
}

fn test_rng() -> WalkerRng {
    WalkerRng::new(RngAlgorithm::Small, 42)
}

mod grid {
    use super::*;

    #[test]
    fn walls_are_the_boundary_shell() {
        let grid = Grid::new(&test_config(ModelKind::Tree, 10, 8, 1));
        assert!(grid.is_wall(0, 4, 0));
        assert!(grid.is_wall(9, 4, 0));
        assert!(grid.is_wall(5, 0, 0));
        assert!(grid.is_wall(5, 7, 0));
        assert!(!grid.is_wall(5, 4, 0));
    }

    #[test]
    fn contains_matches_extents() {
        let grid = Grid::new(&test_config(ModelKind::Tree, 10, 8, 1));
        assert!(grid.contains(0, 0, 0));
        assert!(grid.contains(9, 7, 0));
        assert!(!grid.contains(10, 4, 0));
        assert!(!grid.contains(4, -1, 0));
        assert!(!grid.contains(4, 4, 1));
    }

    #[test]
    fn neighbor_scan_reports_first_color_in_axis_order() {
        let grid = Grid::new(&test_config(ModelKind::Tree, 10, 8, 1));
        assert_eq!(grid.first_neighbor_color(5, 4, 0), None);
        grid.set(5, 5, 0, 9);
        assert_eq!(grid.first_neighbor_color(5, 4, 0), Some(9));
        // +x precedes +y in the scan order.
        grid.set(6, 4, 0, 3);
        assert_eq!(grid.first_neighbor_color(5, 4, 0), Some(3));
    }

    #[test]
    fn three_d_neighbors_include_adjacent_planes() {
        let mut cfg = test_config(ModelKind::Tree, 8, 6, 1);
        cfg.three_d = true;
        let grid = Grid::new(&cfg);
        assert!(!grid.neighbors_occupied(4, 4, 3));
        grid.set(4, 4, 4, 2);
        assert!(grid.neighbors_occupied(4, 4, 3));
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut grid = Grid::new(&test_config(ModelKind::Tree, 10, 8, 1));
        grid.set(3, 3, 0, 7);
        grid.set(6, 2, 0, 1);
        assert_eq!(grid.occupied_cells(), 2);
        grid.clear();
        assert_eq!(grid.occupied_cells(), 0);
    }
}

mod step {
    use super::*;

    #[test]
    fn step_set_sizes() {
        assert_eq!(StepSet::new(false, false).len(), 4);
        assert_eq!(StepSet::new(false, true).len(), 8);
        assert_eq!(StepSet::new(true, false).len(), 6);
        assert_eq!(StepSet::new(true, true).len(), 26);
        assert!(!StepSet::new(false, false).is_empty());
    }

    #[test]
    fn steps_are_unit_moves() {
        let mut rng = test_rng();
        for (three_d, diagonal) in [(false, false), (false, true), (true, false), (true, true)] {
            let steps = StepSet::new(three_d, diagonal);
            for _ in 0..200 {
                let [dx, dy, dz] = steps.pick(&mut rng);
                assert!((-1..=1).contains(&dx));
                assert!((-1..=1).contains(&dy));
                assert!((-1..=1).contains(&dz));
                assert_ne!([dx, dy, dz], [0, 0, 0]);
                if !three_d {
                    assert_eq!(dz, 0);
                }
                if !diagonal {
                    assert_eq!(dx.abs() + dy.abs() + dz.abs(), 1);
                }
            }
        }
    }

    #[test]
    fn walker_moves_by_one_step() {
        let mut rng = test_rng();
        let steps = StepSet::new(false, false);
        let mut walker = Walker::new(5, 5, 0);
        walker.step(&steps, &mut rng);
        let moved = (walker.x - 5).abs() + (walker.y - 5).abs();
        assert_eq!(moved, 1);
        assert_eq!(walker.z, 0);
    }
}

mod frontier {
    use super::*;

    #[test]
    fn advances_only_at_the_frontier() {
        let frontier = Frontier::new(1, 10);
        frontier.advance(0);
        assert_eq!(frontier.depth(), 1);
        frontier.advance(1);
        assert_eq!(frontier.depth(), 2);
        frontier.advance(5);
        assert_eq!(frontier.depth(), 3);
    }

    #[test]
    fn reaching_the_bound_stops_the_run() {
        let frontier = Frontier::new(8, 10);
        frontier.advance(8);
        assert_eq!(frontier.depth(), 9);
        assert!(!frontier.stopped());
        frontier.advance(9);
        assert_eq!(frontier.depth(), 10);
        assert!(frontier.stopped());
        // Clamped: further commits never push past the bound.
        frontier.advance(10);
        assert_eq!(frontier.depth(), 10);
    }

    #[test]
    fn stop_handle_is_sticky() {
        let frontier = Frontier::new(1, 10);
        let handle = frontier.stop_handle();
        assert!(!handle.is_stopped());
        handle.request_stop();
        assert!(frontier.stopped());
        assert!(handle.is_stopped());
    }

    #[test]
    fn reset_rearms_depth_and_stop_flag() {
        let frontier = Frontier::new(1, 3);
        frontier.advance(1);
        frontier.advance(2);
        assert!(frontier.stopped());
        frontier.reset(1);
        assert_eq!(frontier.depth(), 1);
        assert!(!frontier.stopped());
    }
}

mod model {
    use super::*;

    #[test]
    fn tree_seeds_the_floor_center() {
        let grid = Grid::new(&test_config(ModelKind::Tree, 10, 10, 1));
        let initial = Tree.seed(&grid);
        assert_eq!(initial, 1);
        assert_eq!(grid.get(5, 0, 0), ColorIndex::GROWTH.0);
        assert_eq!(grid.occupied_cells(), 1);
    }

    #[test]
    fn tree_attaches_only_next_to_the_structure() {
        let grid = Grid::new(&test_config(ModelKind::Tree, 10, 10, 1));
        let mut rng = test_rng();
        Tree.seed(&grid);
        let next_to_seed = Walker::new(5, 1, 0);
        let isolated = Walker::new(2, 1, 0);
        assert_eq!(
            Tree.try_attach(&grid, &next_to_seed, 1, &mut rng),
            Some(ColorIndex::GROWTH)
        );
        assert_eq!(Tree.try_attach(&grid, &isolated, 1, &mut rng), None);
    }

    #[test]
    fn tree_rejects_cells_past_the_frontier() {
        let grid = Grid::new(&test_config(ModelKind::Tree, 10, 10, 1));
        let mut rng = test_rng();
        grid.set(5, 4, 0, ColorIndex::GROWTH.0);
        let above = Walker::new(5, 5, 0);
        assert_eq!(Tree.try_attach(&grid, &above, 4, &mut rng), None);
        assert!(Tree.try_attach(&grid, &above, 5, &mut rng).is_some());
    }

    #[test]
    fn planar_spawn_sits_on_the_frontier_row() {
        let grid = Grid::new(&test_config(ModelKind::Tree, 10, 10, 1));
        let mut rng = test_rng();
        for _ in 0..50 {
            let w = Tree.spawn(&grid, 4, &mut rng);
            assert_eq!(w.y, 4);
            assert!((0..10).contains(&w.x));
            assert_eq!(w.z, 0);
        }
    }

    #[test]
    fn lateral_exit_wraps_growth_exit_respawns() {
        let grid = Grid::new(&test_config(ModelKind::Tree, 10, 10, 1));
        let mut rng = test_rng();

        let mut wrapped = Walker::new(-1, 4, 0);
        Tree.boundary(&mut wrapped, &grid, 4, &mut rng);
        assert_eq!((wrapped.x, wrapped.y), (9, 4));

        let mut wrapped = Walker::new(10, 4, 0);
        Tree.boundary(&mut wrapped, &grid, 4, &mut rng);
        assert_eq!((wrapped.x, wrapped.y), (0, 4));

        let mut fell_out = Walker::new(5, -1, 0);
        Tree.boundary(&mut fell_out, &grid, 4, &mut rng);
        assert_eq!(fell_out.y, 4);
        assert!((0..10).contains(&fell_out.x));
    }

    #[test]
    fn forest_roots_on_the_floor_without_neighbors() {
        let grid = Grid::new(&test_config(ModelKind::Forest, 10, 10, 1));
        let mut rng = test_rng();
        assert_eq!(Forest.seed(&grid), 1);
        assert_eq!(grid.occupied_cells(), 0);
        let on_floor = Walker::new(4, 0, 0);
        let color = Forest.try_attach(&grid, &on_floor, 1, &mut rng);
        assert!(matches!(color, Some(ColorIndex(c)) if (1..=15).contains(&c)));
    }

    #[test]
    fn forest_branches_inherit_the_neighbor_color() {
        let grid = Grid::new(&test_config(ModelKind::Forest, 10, 10, 1));
        let mut rng = test_rng();
        grid.set(4, 1, 0, 11);
        let above = Walker::new(4, 2, 0);
        assert_eq!(
            Forest.try_attach(&grid, &above, 2, &mut rng),
            Some(ColorIndex(11))
        );
    }

    #[test]
    fn forest_walls_spare_the_floor() {
        let grid = Grid::new(&test_config(ModelKind::Forest, 10, 10, 1));
        let mut rng = test_rng();
        // Interior floor cells attach; side and ceiling cells never do.
        assert!(Forest.try_attach(&grid, &Walker::new(1, 0, 0), 1, &mut rng).is_some());
        assert_eq!(Forest.try_attach(&grid, &Walker::new(0, 0, 0), 1, &mut rng), None);
        grid.set(1, 4, 0, 5);
        assert_eq!(Forest.try_attach(&grid, &Walker::new(0, 4, 0), 9, &mut rng), None);
        grid.set(4, 8, 0, 5);
        assert_eq!(Forest.try_attach(&grid, &Walker::new(4, 9, 0), 9, &mut rng), None);
    }

    #[test]
    fn neuron_seeds_the_center_at_depth_two() {
        let grid = Grid::new(&test_config(ModelKind::Neuron, 21, 21, 1));
        assert_eq!(Neuron.seed(&grid), 2);
        assert_eq!(grid.get(10, 10, 0), ColorIndex::GROWTH.0);
    }

    #[test]
    fn neuron_spawns_on_the_frontier_circle() {
        let grid = Grid::new(&test_config(ModelKind::Neuron, 21, 21, 1));
        let mut rng = test_rng();
        for _ in 0..100 {
            let w = Neuron.spawn(&grid, 6, &mut rng);
            assert!(grid.contains(w.x, w.y, w.z));
            let dx = (w.x - 10) as f64;
            let dy = (w.y - 10) as f64;
            let r = (dx * dx + dy * dy).sqrt();
            // Coordinate truncation keeps the spawn within one cell of the
            // circle on each axis.
            assert!(r <= 6.0 + std::f64::consts::SQRT_2, "spawned at radius {r}");
            assert!(r >= 6.0 - std::f64::consts::SQRT_2, "spawned at radius {r}");
        }
    }

    #[test]
    fn neuron_depth_is_one_plus_rounded_radius() {
        let grid = Grid::new(&test_config(ModelKind::Neuron, 21, 21, 1));
        assert_eq!(Neuron.depth(&grid, &Walker::new(10, 10, 0)), 1);
        assert_eq!(Neuron.depth(&grid, &Walker::new(13, 10, 0)), 4);
        assert_eq!(Neuron.depth(&grid, &Walker::new(13, 14, 0)), 6);
    }

    #[test]
    fn neuron_bound_is_the_inscribed_radius() {
        let grid = Grid::new(&test_config(ModelKind::Neuron, 21, 21, 1));
        assert_eq!(Neuron.bound(&grid), 9);
        let grid = Grid::new(&test_config(ModelKind::Neuron, 30, 12, 1));
        assert_eq!(Neuron.bound(&grid), 5);
    }

    #[test]
    fn model_enum_delegates_to_the_selected_rules() {
        let grid = Grid::new(&test_config(ModelKind::Neuron, 21, 21, 1));
        let model = Model::new(ModelKind::Neuron);
        assert_eq!(model.seed(&grid), 2);
        assert_eq!(model.bound(&grid), 9);
    }
}

mod engine {
    use super::*;

    /// Observer that records every progress snapshot.
    struct Recorder {
        progress: Vec<Progress>,
        renders:  usize,
    }

    impl Recorder {
        fn new() -> Self {
            Self { progress: Vec::new(), renders: 0 }
        }
    }

    impl GrowthObserver for Recorder {
        fn render(&mut self, _grid: &Grid, _points: &[fg_core::Point]) {
            self.renders += 1;
        }

        fn progress(&mut self, progress: &Progress) {
            self.progress.push(*progress);
        }
    }

    #[test]
    fn rejects_invalid_configuration() {
        let mut cfg = test_config(ModelKind::Tree, 10, 10, 1);
        cfg.threads = 0;
        assert!(Engine::new(cfg).is_err());
        assert!(Engine::new(test_config(ModelKind::Tree, 2, 10, 1)).is_err());
    }

    #[test]
    fn rejects_oversized_grids_without_panicking() {
        let mut cfg = test_config(ModelKind::Tree, 100_000, 100_000, 1);
        cfg.three_d = true;
        assert!(Engine::new(cfg).is_err());
        assert!(Engine::new(test_config(ModelKind::Tree, 70_000, 70_000, 1)).is_err());
    }

    #[test]
    fn tree_runs_to_the_top_row() {
        let mut engine = Engine::new(test_config(ModelKind::Tree, 50, 50, 4)).unwrap();
        let summary = engine.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.max_d, 49);
        assert_eq!(summary.bound, 49);
        assert!(summary.points > 0);
    }

    #[test]
    fn first_point_attaches_next_to_the_seed() {
        let mut engine = Engine::new(test_config(ModelKind::Tree, 10, 10, 1)).unwrap();
        let summary = engine.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.max_d, 9);

        let points = engine.points();
        let first = points[0];
        let adjacent = (first.x - 5).abs() + first.y.abs() == 1;
        assert!(adjacent, "first point {first} does not touch the seed");
    }

    #[test]
    fn points_stay_off_the_walls() {
        let mut engine = Engine::new(test_config(ModelKind::Tree, 20, 20, 4)).unwrap();
        engine.run(&mut NoopObserver).unwrap();
        for p in engine.points() {
            assert!(!engine.grid().is_wall(p.x, p.y, p.z), "wall cell committed: {p}");
        }
    }

    #[test]
    fn every_cell_commits_at_most_once() {
        // Enough threads to contend on a small grid.
        let mut engine = Engine::new(test_config(ModelKind::Tree, 30, 30, 8)).unwrap();
        let summary = engine.run(&mut NoopObserver).unwrap();

        let points = engine.points();
        let mut seen = std::collections::HashSet::new();
        for p in &points {
            assert!(seen.insert((p.x, p.y, p.z)), "double commit at {p}");
        }
        // Every committed point is a distinct occupied cell, plus the seed.
        assert_eq!(engine.grid().occupied_cells(), summary.points + 1);
    }

    #[test]
    fn committed_points_touch_the_structure() {
        let mut engine = Engine::new(test_config(ModelKind::Tree, 20, 20, 4)).unwrap();
        engine.run(&mut NoopObserver).unwrap();
        let grid = engine.grid();
        for p in engine.points() {
            assert!(
                grid.neighbors_occupied(p.x, p.y, p.z),
                "disconnected point {p}"
            );
        }
    }

    #[test]
    fn forest_points_connect_except_floor_roots() {
        let mut engine = Engine::new(test_config(ModelKind::Forest, 16, 12, 4)).unwrap();
        engine.run(&mut NoopObserver).unwrap();
        let grid = engine.grid();
        for p in engine.points() {
            if p.y == 0 {
                // Floor roots need no neighbor; they carry a fresh color.
                assert!((1..=15).contains(&p.color.0));
            } else {
                assert!(
                    grid.neighbors_occupied(p.x, p.y, p.z),
                    "disconnected branch point {p}"
                );
            }
        }
    }

    #[test]
    fn neuron_points_connect_and_stay_inside() {
        let mut engine = Engine::new(test_config(ModelKind::Neuron, 21, 21, 4)).unwrap();
        engine.run(&mut NoopObserver).unwrap();
        let grid = engine.grid();
        for p in engine.points() {
            assert!(!grid.is_wall(p.x, p.y, p.z), "wall cell committed: {p}");
            assert!(
                grid.neighbors_occupied(p.x, p.y, p.z),
                "disconnected point {p}"
            );
        }
    }

    #[test]
    fn point_colors_match_grid_cells() {
        let mut engine = Engine::new(test_config(ModelKind::Forest, 16, 12, 4)).unwrap();
        engine.run(&mut NoopObserver).unwrap();
        let grid = engine.grid();
        for p in engine.points() {
            assert_eq!(grid.get(p.x, p.y, p.z), p.color.0);
            assert!((1..=15).contains(&p.color.0));
        }
    }

    #[test]
    fn single_thread_fixed_seed_is_deterministic() {
        let cfg = test_config(ModelKind::Tree, 16, 16, 1);
        let mut a = Engine::new(cfg.clone()).unwrap();
        let mut b = Engine::new(cfg).unwrap();
        a.run(&mut NoopObserver).unwrap();
        b.run(&mut NoopObserver).unwrap();
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn rerun_starts_from_a_clean_slate() {
        let mut engine = Engine::new(test_config(ModelKind::Tree, 16, 16, 1)).unwrap();
        engine.run(&mut NoopObserver).unwrap();
        let first = engine.points();
        engine.run(&mut NoopObserver).unwrap();
        assert_eq!(engine.points(), first);
    }

    #[test]
    fn non_animate_run_is_a_single_round() {
        let mut engine = Engine::new(test_config(ModelKind::Tree, 16, 16, 2)).unwrap();
        let mut observer = Recorder::new();
        let summary = engine.run(&mut observer).unwrap();
        assert_eq!(summary.rounds, 1);
        assert_eq!(observer.renders, 1);
        assert_eq!(observer.progress.len(), 1);
        assert_eq!(observer.progress[0].points, summary.points);
        assert_eq!(observer.progress[0].max_d, summary.max_d);
    }

    #[test]
    fn neuron_grows_to_the_inscribed_radius() {
        let mut engine = Engine::new(test_config(ModelKind::Neuron, 21, 21, 2)).unwrap();
        let summary = engine.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.bound, 9);
        assert_eq!(summary.max_d, 9);
        assert!(summary.points > 0);
    }

    #[test]
    fn three_d_tree_reaches_the_top_plane() {
        let mut cfg = test_config(ModelKind::Tree, 8, 6, 2);
        cfg.three_d = true;
        cfg.length = 8;
        let mut engine = Engine::new(cfg).unwrap();
        let summary = engine.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.max_d, 5);
        let grid = engine.grid();
        assert_eq!(grid.get(4, 4, 0), ColorIndex::GROWTH.0);
        for p in engine.points() {
            assert!(grid.contains(p.x, p.y, p.z));
        }
    }

    #[test]
    fn stop_request_ends_an_animated_run() {
        let mut cfg = test_config(ModelKind::Tree, 200, 200, 2);
        cfg.animate = true;
        let mut engine = Engine::new(cfg).unwrap();
        let handle = engine.stop_handle();

        /// Pulls the plug after the first round's progress report.
        struct StopAfterFirstRound(crate::StopHandle);
        impl GrowthObserver for StopAfterFirstRound {
            fn progress(&mut self, _progress: &Progress) {
                self.0.request_stop();
            }
        }

        let summary = engine.run(&mut StopAfterFirstRound(handle)).unwrap();
        assert!(summary.rounds >= 1);
        assert!(summary.max_d <= summary.bound);
    }
}
