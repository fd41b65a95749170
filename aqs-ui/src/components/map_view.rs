//! Pannable, zoomable map of the monitored locations.
//!
//! The SVG is drawn at 100% of its container and moved with a CSS
//! transform. All transform state lives in a [`PanZoom`]; the handlers here
//! only translate DOM events into container-relative points.

use crate::state::AppState;
use aqs_core::location::GeoBounds;
use aqs_data::pan_zoom::{PanZoom, Point, Size};
use aqs_data::tide;
use dioxus::html::geometry::WheelDelta;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

const MAP_CONTAINER_ID: &str = "aqs-map-container";

/// SVG user-space size; the element itself scales to the container.
const MAP_WIDTH: f64 = 800.0;
const MAP_HEIGHT: f64 = 420.0;
/// Degrees of padding around the outermost locations.
const BOUNDS_PADDING: f64 = 1.5;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Get the bounding client rect of the map container element.
fn container_rect() -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(MAP_CONTAINER_ID)?;
    Some(element.get_bounding_client_rect())
}

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

/// Sync the viewport to the live container and return the pointer in
/// container coordinates.
fn local_point(view: &mut PanZoom, client_x: f64, client_y: f64) -> Option<Point> {
    let rect = container_rect()?;
    view.resize_fitted(Size::new(rect.width(), rect.height()));
    Some(Point::new(client_x - rect.left(), client_y - rect.top()))
}

struct Marker {
    name: String,
    x: f64,
    y: f64,
    height: f64,
    triggered: bool,
}

#[component]
pub fn MapView() -> Element {
    let mut state = use_context::<AppState>();
    let mut view = use_signal(|| {
        PanZoom::new(
            Size::new(MAP_WIDTH, MAP_HEIGHT),
            Size::new(MAP_WIDTH, MAP_HEIGHT),
        )
    });

    let locations = state.locations.read().clone();
    let date = (state.selected_date)();
    let selected = (state.selected_location)();
    let alerts = state.alerts.read().clone();

    let markers: Vec<Marker> = match GeoBounds::enclosing(&locations, BOUNDS_PADDING) {
        Some(bounds) => locations
            .iter()
            .filter_map(|l| {
                let record = tide::generate(&l.name, &date).ok()?;
                let (x, y) = bounds.project(l.latitude, l.longitude, MAP_WIDTH, MAP_HEIGHT);
                Some(Marker {
                    name: l.name.clone(),
                    x,
                    y,
                    height: record.height,
                    triggered: alerts.is_triggered(&record),
                })
            })
            .collect(),
        None => Vec::new(),
    };

    let transform = view.read().css_transform();
    let scale = view.read().transform().scale;
    let cursor = if view.read().is_panning() { "grabbing" } else { "grab" };
    let view_box = format!("0 0 {} {}", MAP_WIDTH, MAP_HEIGHT);

    rsx! {
        div {
            class: "map-view card",
            div {
                style: "display: flex; gap: 8px; align-items: center; margin-bottom: 8px;",
                h3 { style: "margin: 0; flex: 1;", "Monitoring stations" }
                span { style: "color: var(--muted); font-size: 12px;", "{scale:.1}x" }
                button { onclick: move |_| { view.write().zoom_in(); }, "+" }
                button { onclick: move |_| { view.write().zoom_out(); }, "−" }
                button { onclick: move |_| view.write().reset(), "Reset" }
            }
            div {
                id: MAP_CONTAINER_ID,
                style: "position: relative; overflow: hidden; width: 100%; aspect-ratio: {MAP_WIDTH} / {MAP_HEIGHT}; border: 1px solid var(--border); border-radius: 6px; background: var(--water); cursor: {cursor}; user-select: none;",

                onwheel: move |evt: Event<WheelData>| {
                    evt.prevent_default();
                    let delta_y = wheel_delta_y(evt.data().delta());
                    let client = evt.data().client_coordinates();
                    let mut view = view.write();
                    if let Some(cursor) = local_point(&mut view, client.x, client.y) {
                        view.wheel(cursor, delta_y);
                    }
                },

                onmousedown: move |evt: Event<MouseData>| {
                    if evt.trigger_button() != Some(MouseButton::Primary) {
                        return;
                    }
                    let client = evt.client_coordinates();
                    let mut view = view.write();
                    if let Some(pointer) = local_point(&mut view, client.x, client.y) {
                        view.pointer_down(pointer);
                    }
                },

                onmousemove: move |evt: Event<MouseData>| {
                    if !view.read().is_panning() {
                        return;
                    }
                    let client = evt.client_coordinates();
                    let mut view = view.write();
                    if let Some(pointer) = local_point(&mut view, client.x, client.y) {
                        view.pointer_move(pointer);
                    }
                },

                onmouseup: move |_| view.write().pointer_up(),
                onmouseleave: move |_| view.write().pointer_leave(),

                div {
                    style: "position: absolute; inset: 0; transform-origin: 0 0; transform: {transform};",
                    svg {
                        view_box: "{view_box}",
                        width: "100%",
                        height: "100%",
                        rect { x: "0", y: "0", width: "{MAP_WIDTH}", height: "{MAP_HEIGHT}", fill: "var(--water)" }
                        for marker in markers.into_iter() {
                            MapMarker {
                                key: "{marker.name}",
                                name: marker.name.clone(),
                                x: marker.x,
                                y: marker.y,
                                height: marker.height,
                                triggered: marker.triggered,
                                selected: marker.name == selected,
                                on_select: move |name: String| state.selected_location.set(name),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MapMarker(
    name: String,
    x: f64,
    y: f64,
    height: f64,
    triggered: bool,
    selected: bool,
    on_select: EventHandler<String>,
) -> Element {
    let fill = if triggered { "var(--danger)" } else { "var(--accent)" };
    let radius = if selected { 10 } else { 7 };
    let stroke = if selected { "var(--fg)" } else { "none" };
    let label_y = y - 14.0;
    let label = format!("{} {:.1} m", name, height);
    rsx! {
        g {
            class: "map-marker",
            style: "cursor: pointer;",
            onclick: move |_| on_select.call(name.clone()),
            circle { cx: "{x}", cy: "{y}", r: "{radius}", fill: "{fill}", stroke: "{stroke}", stroke_width: "2" }
            text { x: "{x}", y: "{label_y}", text_anchor: "middle", font_size: "12", fill: "var(--fg)", "{label}" }
        }
    }
}
