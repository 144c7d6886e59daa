//! Rendering properties of the frame renderer, through the public facade.

use tile_viewer::adapter::decode_event;
use tile_viewer::core::{FillOp, FrameRenderer, RecordingSurface, SchedulePolicy, Viewer};
use tile_viewer::types::{ColorTable, Screen, Tile, TileColor, ViewerEvent};

fn fill(x: usize, y: usize, color: TileColor) -> FillOp {
    FillOp {
        x,
        y,
        color: color.rgb(),
    }
}

/// Deterministic screen with every tile kind, `w` columns by `h` rows.
fn patterned_screen(w: usize, h: usize) -> Screen {
    let codes = (0..h)
        .map(|y| (0..w).map(|x| ((x * 7 + y * 3) % 4) as u8).collect())
        .collect();
    Screen::from_codes(codes).unwrap()
}

#[test]
fn example_two_by_two_screen() {
    let ev = decode_event(r#"{"event":"update_screen","data":[[0,1],[2,3]]}"#).unwrap();
    let mut viewer = Viewer::new(SchedulePolicy::Immediate, RecordingSurface::new());
    assert!(viewer.handle_event(ev));

    assert_eq!(
        viewer.surface().ops(),
        &[
            fill(0, 0, TileColor::White),
            fill(1, 0, TileColor::Black),
            fill(0, 1, TileColor::Orange),
            fill(1, 1, TileColor::Red),
        ]
    );
}

#[test]
fn every_tile_gets_one_fill_at_its_position() {
    let table = ColorTable::STANDARD;
    let renderer = FrameRenderer::new(table);

    for (w, h) in [(1, 1), (2, 5), (13, 13), (40, 3)] {
        let screen = patterned_screen(w, h);
        let mut rec = RecordingSurface::new();
        assert_eq!(renderer.render(&screen, &mut rec), w * h);
        assert_eq!(rec.ops().len(), w * h);

        for op in rec.ops() {
            let tile = screen.get(op.x, op.y).expect("fill inside screen");
            assert_eq!(op.color, table.color(tile).rgb());
        }

        let mut positions: Vec<_> = rec.ops().iter().map(|o| (o.x, o.y)).collect();
        positions.sort_unstable();
        positions.dedup();
        assert_eq!(positions.len(), w * h, "each position filled once");
    }
}

#[test]
fn other_events_produce_no_fills() {
    for text in [
        r#"{"event":"update_stats","data":[[0,1],[2,3]]}"#,
        r#"{"event":"UPDATE_SCREEN","data":[[0]]}"#,
        r#"{"event":""}"#,
    ] {
        let ev = decode_event(text).unwrap();
        assert!(matches!(ev, ViewerEvent::Unknown(_)));

        let mut viewer = Viewer::new(SchedulePolicy::Immediate, RecordingSurface::new());
        assert!(!viewer.handle_event(ev));
        assert!(!viewer.on_refresh());
        assert!(viewer.surface().ops().is_empty());
    }
}

#[test]
fn identical_screens_render_identically() {
    let screen = patterned_screen(13, 13);
    let mut viewer = Viewer::new(SchedulePolicy::Immediate, RecordingSurface::new());

    viewer.handle_event(ViewerEvent::UpdateScreen(screen.clone()));
    let first = viewer.surface_mut().take_ops();
    viewer.handle_event(ViewerEvent::UpdateScreen(screen));
    let second = viewer.surface_mut().take_ops();

    assert_eq!(first.len(), 169);
    assert_eq!(first, second);
}

#[test]
fn filled_screen_uses_a_single_color() {
    let mut rec = RecordingSurface::new();
    FrameRenderer::default().render(&Screen::filled(4, 4, Tile::Mario), &mut rec);
    assert!(rec.ops().iter().all(|o| o.color == TileColor::Red.rgb()));
}
