//! Layout model for the game's on-screen panels: a status strip on top, the
//! HUD column on the left, and the map with the event log on the right.

use taffy::TaffyTree;
use taffy::prelude::*;

const GAP: f32 = 16.0;
const HUD_WIDTH: f32 = 280.0;
const EVENT_LOG_HEIGHT: f32 = 150.0;

pub struct LayoutNodes {
    root: NodeId,
    status: NodeId,
    main_row: NodeId,
    hud_col: NodeId,
    player_info: NodeId,
    nearby_actions: NodeId,
    inspect: NodeId,
    map_col: NodeId,
    map: NodeId,
    event_log: NodeId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub struct FrameLayout {
    pub status: PanelRect,
    pub player_info: PanelRect,
    pub nearby_actions: PanelRect,
    pub inspect: PanelRect,
    pub map: PanelRect,
    pub event_log: PanelRect,
}

impl FrameLayout {
    pub fn panels(&self) -> [PanelRect; 6] {
        [self.status, self.player_info, self.nearby_actions, self.inspect, self.map, self.event_log]
    }
}

fn below(gap: f32) -> taffy::Rect<LengthPercentageAuto> {
    taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(gap) }
}

pub fn setup_layout(taffy: &mut TaffyTree<()>) -> LayoutNodes {
    let status = taffy
        .new_leaf(Style {
            size: Size { width: percent(1.0), height: length(36.0) },
            margin: below(GAP),
            ..Default::default()
        })
        .expect("status node");
    let player_info = taffy
        .new_leaf(Style { flex_grow: 1.0, margin: below(GAP), ..Default::default() })
        .expect("player info node");
    let nearby_actions = taffy
        .new_leaf(Style { flex_grow: 1.0, margin: below(GAP), ..Default::default() })
        .expect("nearby actions node");
    let inspect = taffy.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).expect("inspect node");
    let hud_col = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                size: Size { width: length(HUD_WIDTH), height: auto() },
                flex_shrink: 0.0,
                margin: taffy::Rect { left: zero(), right: length(GAP), top: zero(), bottom: zero() },
                ..Default::default()
            },
            &[player_info, nearby_actions, inspect],
        )
        .expect("hud column node");
    let map = taffy
        .new_leaf(Style { flex_grow: 1.0, margin: below(GAP), ..Default::default() })
        .expect("map node");
    let event_log = taffy
        .new_leaf(Style {
            size: Size { width: percent(1.0), height: length(EVENT_LOG_HEIGHT) },
            flex_shrink: 0.0,
            ..Default::default()
        })
        .expect("event log node");
    let map_col = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                flex_grow: 1.0,
                ..Default::default()
            },
            &[map, event_log],
        )
        .expect("map column node");
    let main_row = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                size: Size { width: percent(1.0), height: percent(1.0) },
                flex_grow: 1.0,
                ..Default::default()
            },
            &[hud_col, map_col],
        )
        .expect("main row node");
    let root = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                size: Size { width: percent(1.0), height: percent(1.0) },
                padding: taffy::Rect {
                    left: length(GAP),
                    right: length(GAP),
                    top: length(GAP),
                    bottom: length(GAP),
                },
                ..Default::default()
            },
            &[status, main_row],
        )
        .expect("root node");
    LayoutNodes {
        root,
        status,
        main_row,
        hud_col,
        player_info,
        nearby_actions,
        inspect,
        map_col,
        map,
        event_log,
    }
}

pub fn compute_frame_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
) -> FrameLayout {
    let available_size = Size {
        width: AvailableSpace::Definite(viewport_width),
        height: AvailableSpace::Definite(viewport_height),
    };
    taffy.compute_layout(nodes.root, available_size).expect("compute layout");

    let l_root = taffy.layout(nodes.root).expect("root layout");
    let l_status = taffy.layout(nodes.status).expect("status layout");
    let l_main = taffy.layout(nodes.main_row).expect("main layout");
    let l_hud = taffy.layout(nodes.hud_col).expect("hud layout");
    let l_player = taffy.layout(nodes.player_info).expect("player info layout");
    let l_actions = taffy.layout(nodes.nearby_actions).expect("nearby actions layout");
    let l_inspect = taffy.layout(nodes.inspect).expect("inspect layout");
    let l_map_col = taffy.layout(nodes.map_col).expect("map column layout");
    let l_map = taffy.layout(nodes.map).expect("map layout");
    let l_event = taffy.layout(nodes.event_log).expect("event layout");

    FrameLayout {
        status: panel_rect(l_status, &[l_root]),
        player_info: panel_rect(l_player, &[l_root, l_main, l_hud]),
        nearby_actions: panel_rect(l_actions, &[l_root, l_main, l_hud]),
        inspect: panel_rect(l_inspect, &[l_root, l_main, l_hud]),
        map: panel_rect(l_map, &[l_root, l_main, l_map_col]),
        event_log: panel_rect(l_event, &[l_root, l_main, l_map_col]),
    }
}

fn panel_rect(layout: &taffy::Layout, parents: &[&taffy::Layout]) -> PanelRect {
    let mut x = layout.location.x;
    let mut y = layout.location.y;
    for parent in parents {
        x += parent.location.x;
        y += parent.location.y;
    }

    PanelRect { x, y, width: layout.size.width, height: layout.size.height }
}
