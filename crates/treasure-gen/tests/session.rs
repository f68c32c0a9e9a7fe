use std::path::PathBuf;
use std::sync::Arc;

use treasure_gen::{
    Effect, FixedSeeds, MapContext, MapEvent, MapState, Viewport, dispatch,
};

fn start(seeds: &mut FixedSeeds) -> (MapContext, MapState) {
    let ctx = MapContext::default();
    let state = MapState::new(&ctx, Viewport::new(800, 600), seeds);
    (ctx, state)
}

#[test]
fn regenerate_replaces_map_and_repaints() {
    let mut seeds = FixedSeeds::new([42, 43]);
    let (ctx, state) = start(&mut seeds);
    assert_eq!(state.map.seed(), 42);
    let (next, effects) = dispatch(&ctx, &state, MapEvent::Regenerate, &mut seeds, 0);
    assert_eq!(effects, vec![Effect::Repaint]);
    assert_eq!(next.map.seed(), 43);
    assert_eq!(next.viewport, state.viewport);
    // the previous map is untouched
    assert_eq!(state.map.seed(), 42);
}

#[test]
fn toggle_fullscreen_keeps_the_map() {
    let mut seeds = FixedSeeds::new([1]);
    let (ctx, state) = start(&mut seeds);
    let (next, effects) = dispatch(&ctx, &state, MapEvent::ToggleFullscreen, &mut seeds, 5);
    assert_eq!(effects, vec![Effect::ToggleFullscreen]);
    assert!(Arc::ptr_eq(&next.map, &state.map));
}

#[test]
fn export_names_file_after_elapsed_millis() {
    let mut seeds = FixedSeeds::new([1]);
    let (ctx, state) = start(&mut seeds);
    let (_, effects) = dispatch(&ctx, &state, MapEvent::Export, &mut seeds, 12_345);
    assert_eq!(
        effects,
        vec![Effect::SaveFrame(PathBuf::from("./PixelTreasureMap_12345.jpg"))]
    );
}

#[test]
fn resize_rebuilds_grid_for_new_viewport() {
    let mut seeds = FixedSeeds::new([1, 2]);
    let (ctx, state) = start(&mut seeds);
    let (next, effects) = dispatch(
        &ctx,
        &state,
        MapEvent::Resize {
            width: 1024,
            height: 768,
        },
        &mut seeds,
        0,
    );
    assert_eq!(
        effects,
        vec![
            Effect::ResizeSurface {
                width: 1024,
                height: 768
            },
            Effect::Repaint
        ]
    );
    assert_eq!(next.viewport, Viewport::new(1024, 768));
    assert_eq!(next.map.viewport(), next.viewport);
    assert_eq!(next.map.grid().cols(), 205);
    assert_eq!(next.map.grid().rows(), 154);
    assert_eq!(next.map.seed(), 2);
}

#[test]
fn resize_to_same_or_empty_size_is_ignored() {
    let mut seeds = FixedSeeds::new([1]);
    let (ctx, state) = start(&mut seeds);
    for (width, height) in [(800, 600), (0, 600), (800, 0)] {
        let (next, effects) = dispatch(
            &ctx,
            &state,
            MapEvent::Resize { width, height },
            &mut seeds,
            0,
        );
        assert!(effects.is_empty());
        assert!(Arc::ptr_eq(&next.map, &state.map));
    }
}

#[test]
fn same_seed_reproduces_marker_and_grid() {
    let ctx = MapContext::default();
    let vp = Viewport::new(800, 600);
    let a = ctx.generate(vp, 42);
    let b = ctx.generate(vp, 42);
    assert_eq!(a, b);
    assert_eq!(a.marker(), b.marker());
}
