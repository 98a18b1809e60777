//! Typed identifiers for the anchor/handle layout of a control-point array.
//!
//! A spline's points are laid out `[anchor, handle, handle, anchor, ...]`
//! with anchors at indices divisible by 3. The functions here centralize
//! the index arithmetic, including the wrap-around cases for looped
//! splines, so the spline engine never does raw modulo math.

/// Identifier for an on-curve anchor, counted `0..=segment_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorId(usize);

impl AnchorId {
    /// The anchor governing the given point index: a handle belongs to
    /// its nearest anchor, an anchor to itself.
    #[must_use]
    pub fn of_point(point_index: usize) -> Self {
        Self((point_index + 1) / 3)
    }

    /// Ordinal position in the continuity-mode sequence.
    #[must_use]
    pub fn ordinal(self) -> usize {
        self.0
    }

    /// Index of the anchor in the control-point array.
    #[must_use]
    pub fn point_index(self) -> usize {
        self.0 * 3
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn is_last(self, anchor_count: usize) -> bool {
        self.0 + 1 == anchor_count
    }
}

/// The two handles flanking an anchor during continuity enforcement:
/// `fixed` is the handle just edited, `enforced` is the opposite one
/// that gets repositioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlePair {
    pub fixed: usize,
    pub enforced: usize,
}

/// Resolves the fixed/enforced handle indices around `anchor` given the
/// point that was just edited. Indices falling off either end of the
/// array substitute the wrap partner on the opposite end; callers only
/// reach those branches for the shared anchor of a looped spline.
#[must_use]
pub fn resolve_handles(edited: usize, anchor: AnchorId, point_count: usize) -> HandlePair {
    let middle = anchor.point_index();
    let before = if middle == 0 {
        point_count - 2
    } else {
        middle - 1
    };
    let after = if middle + 1 >= point_count {
        1
    } else {
        middle + 1
    };

    if edited <= middle {
        HandlePair {
            fixed: before,
            enforced: after,
        }
    } else {
        HandlePair {
            fixed: after,
            enforced: before,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn handles_map_to_nearest_anchor() {
        assert_eq!(AnchorId::of_point(0), AnchorId::of_point(1));
        assert_eq!(AnchorId::of_point(2), AnchorId::of_point(3));
        assert_eq!(AnchorId::of_point(3), AnchorId::of_point(4));
        assert_eq!(AnchorId::of_point(3).point_index(), 3);
        assert_eq!(AnchorId::of_point(5).point_index(), 6);
    }

    #[test]
    fn editing_incoming_handle_fixes_it() {
        // 7-point spline, interior anchor at 3. Editing point 2 fixes 2
        // and enforces 4; editing point 4 does the reverse.
        let anchor = AnchorId::of_point(2);
        assert_eq!(
            resolve_handles(2, anchor, 7),
            HandlePair {
                fixed: 2,
                enforced: 4
            }
        );
        assert_eq!(
            resolve_handles(4, anchor, 7),
            HandlePair {
                fixed: 4,
                enforced: 2
            }
        );
    }

    #[test]
    fn editing_the_anchor_itself_fixes_previous_handle() {
        let anchor = AnchorId::of_point(3);
        assert_eq!(
            resolve_handles(3, anchor, 7),
            HandlePair {
                fixed: 2,
                enforced: 4
            }
        );
    }

    #[test]
    fn first_anchor_wraps_to_far_end() {
        // Looped spline: the handle "before" anchor 0 is the handle
        // preceding the identified last anchor.
        let anchor = AnchorId::of_point(0);
        assert_eq!(
            resolve_handles(0, anchor, 7),
            HandlePair {
                fixed: 5,
                enforced: 1
            }
        );
    }

    #[test]
    fn last_anchor_wraps_to_front() {
        let anchor = AnchorId::of_point(6);
        assert_eq!(
            resolve_handles(6, anchor, 7),
            HandlePair {
                fixed: 5,
                enforced: 1
            }
        );
        // Editing handle 1 of a looped spline enforces the far handle.
        assert_eq!(
            resolve_handles(1, AnchorId::of_point(1), 7),
            HandlePair {
                fixed: 1,
                enforced: 5
            }
        );
    }
}
