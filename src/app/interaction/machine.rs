use super::InteractionPhase;
use crate::app::events::{Modifiers, PointerButton};
use crate::app::state::ToolMode;
use crate::app::{AppCommand, AppState};
use crate::core::geom::distance_sq;
use crate::core::{BorderFeature, PointTarget, RailwayId, ScreenPos, WorldPos, ZoomDirection};

/// Maustaste gedrückt.
pub fn on_pointer_down(
    state: &AppState,
    pos: ScreenPos,
    button: PointerButton,
    modifiers: Modifiers,
) -> Vec<AppCommand> {
    if state.dialogs.any_open() {
        log::debug!("Zeiger-Eingabe ignoriert: Dialog offen");
        return Vec::new();
    }

    match state.phase {
        InteractionPhase::Idle => start_gesture(state, pos, button, modifiers),
        InteractionPhase::DrawingNewRailway {
            railway,
            point_count,
        } => match button {
            PointerButton::Primary => vec![
                AppCommand::SetPhase {
                    phase: InteractionPhase::DrawingNewRailway {
                        railway,
                        point_count: point_count + 1,
                    },
                },
                AppCommand::InsertPoint {
                    railway,
                    before: point_count,
                    pos: state.view.viewport.screen_to_world(pos),
                },
            ],
            PointerButton::Secondary if point_count <= 1 => vec![
                AppCommand::SetPhase {
                    phase: InteractionPhase::Idle,
                },
                AppCommand::RemoveRailway { railway },
            ],
            PointerButton::Secondary => vec![AppCommand::SetPhase {
                phase: InteractionPhase::Idle,
            }],
            PointerButton::Middle => Vec::new(),
        },
        // Eine Geste läuft bereits
        _ => Vec::new(),
    }
}

fn start_gesture(
    state: &AppState,
    pos: ScreenPos,
    button: PointerButton,
    modifiers: Modifiers,
) -> Vec<AppCommand> {
    let mode = state.editor.mode();
    let wants_pan = match button {
        PointerButton::Middle => true,
        PointerButton::Primary => {
            mode == ToolMode::Pan || (modifiers.shift && mode != ToolMode::EditBorders)
        }
        PointerButton::Secondary => false,
    };
    if wants_pan {
        return set_phase(InteractionPhase::PanningViewport {
            anchor: pos,
            origin: state.view.viewport,
        });
    }

    match mode {
        ToolMode::Pan => Vec::new(),
        ToolMode::NewRailway => match button {
            PointerButton::Primary => vec![AppCommand::CreateRailway {
                pos: state.view.viewport.screen_to_world(pos),
            }],
            _ => Vec::new(),
        },
        ToolMode::EditRailway => start_railway_edit(state, pos, button),
        ToolMode::EditStation => start_station_edit(state, pos, button),
        ToolMode::EditBorders => start_border_edit(state, pos, button, modifiers),
    }
}

fn start_railway_edit(state: &AppState, pos: ScreenPos, button: PointerButton) -> Vec<AppCommand> {
    let Some(railway) = state.editor.selected_railway() else {
        return Vec::new();
    };
    let Some(hit) = state.map.find_nearest_segment(
        &state.view.viewport,
        railway,
        pos,
        state.options.hit_threshold_px,
    ) else {
        return Vec::new();
    };

    match (button, hit.target()) {
        (PointerButton::Primary, target) => set_phase(InteractionPhase::DraggingPoint {
            railway,
            target,
            pointer: pos,
        }),
        (PointerButton::Secondary, PointTarget::Existing(index)) => {
            vec![AppCommand::RemovePoint { railway, index }]
        }
        _ => Vec::new(),
    }
}

fn start_station_edit(state: &AppState, pos: ScreenPos, button: PointerButton) -> Vec<AppCommand> {
    let Some(railway) = state.editor.selected_railway() else {
        return Vec::new();
    };
    let Some(PointTarget::Existing(point_index)) = state
        .map
        .find_nearest_segment(
            &state.view.viewport,
            railway,
            pos,
            state.options.hit_threshold_px,
        )
        .map(|hit| hit.target())
    else {
        return Vec::new();
    };

    match button {
        PointerButton::Primary => set_phase(InteractionPhase::LinkingStation {
            railway,
            point_index,
            anchor: pos,
            moved: false,
            pointer: pos,
        }),
        PointerButton::Secondary if state.map.station_info(railway, point_index).is_some() => {
            vec![AppCommand::DetachStation {
                railway,
                index: point_index,
            }]
        }
        _ => Vec::new(),
    }
}

fn start_border_edit(
    state: &AppState,
    pos: ScreenPos,
    button: PointerButton,
    modifiers: Modifiers,
) -> Vec<AppCommand> {
    let Some(feature) = state.map.find_nearest_border_feature(
        &state.view.viewport,
        pos,
        state.options.hit_threshold_px,
    ) else {
        return Vec::new();
    };

    match (button, feature) {
        (PointerButton::Primary, BorderFeature::Point(anchor)) if modifiers.any() => {
            set_phase(InteractionPhase::AddingBorderEdge {
                anchor,
                style: state.editor.border_style,
                pointer: pos,
            })
        }
        (PointerButton::Primary, _) if modifiers.any() => Vec::new(),
        (PointerButton::Primary, feature) => set_phase(InteractionPhase::DraggingBorderFeature {
            feature,
            pointer: pos,
        }),
        (PointerButton::Secondary, BorderFeature::Point(id)) => {
            vec![AppCommand::RemoveBorderPoint { id }]
        }
        (PointerButton::Secondary, BorderFeature::Edge(a, b)) => {
            vec![AppCommand::RemoveBorderEdge { a, b }]
        }
        (PointerButton::Middle, _) => Vec::new(),
    }
}

/// Zeiger bewegt: Live-Position der laufenden Geste nachführen.
pub fn on_pointer_move(state: &AppState, pos: ScreenPos) -> Vec<AppCommand> {
    let phase = match state.phase {
        InteractionPhase::PanningViewport { anchor, origin } => {
            return vec![AppCommand::SetViewportOrigin {
                top_left: origin.pan_by(anchor - pos).top_left,
            }];
        }
        InteractionPhase::DraggingPoint {
            railway, target, ..
        } => InteractionPhase::DraggingPoint {
            railway,
            target,
            pointer: pos,
        },
        InteractionPhase::LinkingStation {
            railway,
            point_index,
            anchor,
            moved,
            ..
        } => {
            let threshold = i64::from(state.options.drag_threshold_px);
            InteractionPhase::LinkingStation {
                railway,
                point_index,
                anchor,
                moved: moved || distance_sq(anchor, pos) > threshold * threshold,
                pointer: pos,
            }
        }
        InteractionPhase::DraggingBorderFeature { feature, .. } => {
            InteractionPhase::DraggingBorderFeature {
                feature,
                pointer: pos,
            }
        }
        InteractionPhase::AddingBorderEdge { anchor, style, .. } => {
            InteractionPhase::AddingBorderEdge {
                anchor,
                style,
                pointer: pos,
            }
        }
        InteractionPhase::Idle | InteractionPhase::DrawingNewRailway { .. } => return Vec::new(),
    };
    set_phase(phase)
}

/// Maustaste losgelassen: Geste abschließen.
pub fn on_pointer_up(state: &AppState, pos: ScreenPos) -> Vec<AppCommand> {
    let viewport = &state.view.viewport;
    let commit = match state.phase {
        InteractionPhase::PanningViewport { .. } => None,
        InteractionPhase::DraggingPoint {
            railway, target, ..
        } => Some(point_commit(railway, target, viewport.screen_to_world(pos))),
        InteractionPhase::LinkingStation {
            railway,
            point_index,
            moved,
            ..
        } => Some(if moved {
            AppCommand::LinkStation {
                railway,
                index: point_index,
                pos,
            }
        } else {
            AppCommand::OpenStationDialog {
                railway,
                point_index,
            }
        }),
        InteractionPhase::DraggingBorderFeature { feature, .. } => {
            Some(border_commit(feature, viewport.screen_to_world(pos)))
        }
        InteractionPhase::AddingBorderEdge { anchor, style, .. } => {
            let target = state.map.find_nearest_border_feature(
                viewport,
                pos,
                state.options.hit_threshold_px,
            );
            match target {
                Some(BorderFeature::Point(id)) if id == anchor => None,
                Some(BorderFeature::Point(b)) => Some(AppCommand::ConnectBorderPoints {
                    a: anchor,
                    b,
                    style,
                }),
                _ => Some(AppCommand::ConnectNewBorderPoint {
                    anchor,
                    pos: viewport.screen_to_world(pos),
                    style,
                }),
            }
        }
        InteractionPhase::Idle | InteractionPhase::DrawingNewRailway { .. } => return Vec::new(),
    };

    finish(commit)
}

/// Zeiger hat die Zeichenfläche verlassen.
///
/// Pan und Drags enden wie beim Loslassen an der letzten Live-Position;
/// Stations- und Kanten-Gesten warten auf ein explizites Ende.
pub fn on_pointer_leave(state: &AppState) -> Vec<AppCommand> {
    let viewport = &state.view.viewport;
    let commit = match state.phase {
        InteractionPhase::PanningViewport { .. } => None,
        InteractionPhase::DraggingPoint {
            railway,
            target,
            pointer,
        } => Some(point_commit(railway, target, viewport.screen_to_world(pointer))),
        InteractionPhase::DraggingBorderFeature { feature, pointer } => {
            Some(border_commit(feature, viewport.screen_to_world(pointer)))
        }
        _ => return Vec::new(),
    };
    finish(commit)
}

/// Mausrad: Zoom um den Zeiger, nur im Leerlauf.
pub fn on_wheel(state: &AppState, pos: ScreenPos, direction: ZoomDirection) -> Vec<AppCommand> {
    if !state.is_idle() {
        log::debug!("Zoom ignoriert: Phase '{}'", state.phase.name());
        return Vec::new();
    }
    vec![AppCommand::ZoomAt { pos, direction }]
}

/// Escape: laufende Geste ohne Mutation verwerfen.
pub fn on_escape(state: &AppState) -> Vec<AppCommand> {
    if state.phase.is_idle() {
        return Vec::new();
    }
    log::debug!("Geste '{}' abgebrochen", state.phase.name());
    set_phase(InteractionPhase::Idle)
}

fn point_commit(railway: RailwayId, target: PointTarget, pos: WorldPos) -> AppCommand {
    match target {
        PointTarget::Existing(index) => AppCommand::MovePoint {
            railway,
            index,
            pos,
        },
        PointTarget::InsertBefore(before) => AppCommand::InsertPoint {
            railway,
            before,
            pos,
        },
    }
}

fn border_commit(feature: BorderFeature, pos: WorldPos) -> AppCommand {
    match feature {
        BorderFeature::Point(id) => AppCommand::MoveBorderPoint { id, pos },
        BorderFeature::Edge(a, b) => AppCommand::InsertBorderPointOnEdge { a, b, pos },
    }
}

/// Phase auf Idle, danach optional der Commit.
fn finish(commit: Option<AppCommand>) -> Vec<AppCommand> {
    let mut commands = set_phase(InteractionPhase::Idle);
    commands.extend(commit);
    commands
}

fn set_phase(phase: InteractionPhase) -> Vec<AppCommand> {
    vec![AppCommand::SetPhase { phase }]
}
