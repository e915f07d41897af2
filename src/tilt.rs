//! Pointer-driven tilt effect for project cards.
//!
//! The rotation math lives in [`TiltTransform`] so it can be exercised
//! without a DOM. [`TiltHandle`] owns the `NodeRef` wiring that applies
//! the transform to the rendered element.

use leptos::{ev::MouseEvent, html, prelude::*};

/// Rotation in degrees when the pointer reaches a card edge.
const MAX_TILT_DEG: f64 = 4.0;
const PERSPECTIVE_PX: u32 = 800;

/// A perspective + two-axis rotation describing how a card surface leans
/// toward the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl TiltTransform {
    /// The resting state: no rotation on either axis.
    pub const NEUTRAL: TiltTransform = TiltTransform {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Derive the tilt for a pointer at `(x, y)` relative to the top-left
    /// corner of a `width` x `height` surface.
    ///
    /// The rotation grows linearly with the offset from the surface center
    /// and is signed so the surface tilts toward the pointer. A surface
    /// with no area yields [`TiltTransform::NEUTRAL`].
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        let mid_x = width / 2.0;
        let mid_y = height / 2.0;
        if mid_x <= 0.0 || mid_y <= 0.0 {
            return Self::NEUTRAL;
        }
        Self {
            rotate_x: ((y - mid_y) / mid_y) * -MAX_TILT_DEG,
            rotate_y: ((x - mid_x) / mid_x) * MAX_TILT_DEG,
        }
    }

    /// CSS `transform` value for this tilt.
    pub fn to_css(&self) -> String {
        format!(
            "perspective({PERSPECTIVE_PX}px) rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Owns the rendered surface of one card and applies tilt transforms to it.
///
/// Each card creates its own handle; the `NodeRef` is only populated while
/// the card is mounted, and both handlers fall back to a no-op when it is
/// empty.
#[derive(Clone, Copy, Default)]
pub struct TiltHandle {
    surface: NodeRef<html::Div>,
}

impl TiltHandle {
    pub fn new() -> Self {
        Self {
            surface: NodeRef::new(),
        }
    }

    /// The node ref to attach to the card element.
    pub fn surface(&self) -> NodeRef<html::Div> {
        self.surface
    }

    /// Handler tilting the card toward the pointer.
    pub fn on_mouse_move(self) -> impl Fn(MouseEvent) + Copy {
        move |ev: MouseEvent| {
            let Some(el) = self.surface.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let x = f64::from(ev.client_x()) - rect.left();
            let y = f64::from(ev.client_y()) - rect.top();
            let tilt = TiltTransform::from_pointer(x, y, rect.width(), rect.height());
            apply_transform(&el, &tilt);
        }
    }

    /// Handler resetting the card to its resting state.
    pub fn on_mouse_leave(self) -> impl Fn(MouseEvent) + Copy {
        move |_| {
            let Some(el) = self.surface.get_untracked() else {
                return;
            };
            apply_transform(&el, &TiltTransform::NEUTRAL);
        }
    }
}

fn apply_transform(el: &web_sys::HtmlDivElement, tilt: &TiltTransform) {
    if web_sys::HtmlElement::style(el).set_property("transform", &tilt.to_css()).is_err() {
        log::debug!("could not set tilt transform on card surface");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_at_center_produces_no_rotation() {
        let tilt = TiltTransform::from_pointer(150.0, 100.0, 300.0, 200.0);
        assert_eq!(tilt, TiltTransform::NEUTRAL);
    }

    #[test]
    fn surface_tilts_toward_the_pointer() {
        // Pointer at the right edge rotates around Y toward the pointer
        let tilt = TiltTransform::from_pointer(300.0, 100.0, 300.0, 200.0);
        assert_eq!(tilt.rotate_y, MAX_TILT_DEG);
        assert_eq!(tilt.rotate_x, 0.0);

        // Pointer at the top edge tips the top of the card back
        let tilt = TiltTransform::from_pointer(150.0, 0.0, 300.0, 200.0);
        assert_eq!(tilt.rotate_x, MAX_TILT_DEG);
        assert_eq!(tilt.rotate_y, 0.0);

        // Bottom-left corner flips both signs
        let tilt = TiltTransform::from_pointer(0.0, 200.0, 300.0, 200.0);
        assert_eq!(tilt.rotate_x, -MAX_TILT_DEG);
        assert_eq!(tilt.rotate_y, -MAX_TILT_DEG);
    }

    #[test]
    fn rotation_is_bounded_inside_the_surface() {
        let positions = [
            (0.0, 0.0),
            (300.0, 0.0),
            (0.0, 200.0),
            (300.0, 200.0),
            (75.0, 50.0),
            (225.0, 150.0),
        ];
        for (x, y) in positions {
            let tilt = TiltTransform::from_pointer(x, y, 300.0, 200.0);
            assert!(tilt.rotate_x.abs() <= MAX_TILT_DEG);
            assert!(tilt.rotate_y.abs() <= MAX_TILT_DEG);
        }
    }

    #[test]
    fn tilt_is_idempotent_for_a_fixed_pointer() {
        let first = TiltTransform::from_pointer(80.0, 120.0, 300.0, 200.0);
        let second = TiltTransform::from_pointer(80.0, 120.0, 300.0, 200.0);
        assert_eq!(first, second);
    }

    #[test]
    fn degenerate_surface_falls_back_to_neutral() {
        assert_eq!(
            TiltTransform::from_pointer(0.0, 0.0, 0.0, 0.0),
            TiltTransform::NEUTRAL
        );
        assert_eq!(
            TiltTransform::from_pointer(10.0, 10.0, 300.0, 0.0),
            TiltTransform::NEUTRAL
        );
    }

    #[test]
    fn neutral_css_has_zero_rotation_on_both_axes() {
        assert_eq!(
            TiltTransform::NEUTRAL.to_css(),
            "perspective(800px) rotateX(0deg) rotateY(0deg)"
        );
    }
}
