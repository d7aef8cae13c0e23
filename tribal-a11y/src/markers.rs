//! Style markers: the class names the preference engine places on the root
//! document element.
//!
//! [`apply_state`] is the only code that adds or removes these markers. It
//! always clears the full set before adding back the markers implied by the
//! current state, so repeated calls settle on the same result and a marker
//! never outlives the preference that produced it.

use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::prefs::{FontStep, LetterSpacing, LineSpacing, PreferenceState, PreferenceToggle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleMarker {
    FontStep0,
    FontStep1,
    FontStep2,
    FontStep3,
    FontStep4,
    LineRelaxed,
    LineLoose,
    LetterWide,
    LetterWider,
    HighContrast,
    Grayscale,
    InvertColors,
    HighlightLinks,
    EnhancedFocus,
    ReduceMotion,
}

/// Markers present for one state; at most one per dimension.
pub type MarkerSet = SmallVec<[StyleMarker; 9]>;

impl StyleMarker {
    pub const ALL: [Self; 15] = [
        Self::FontStep0,
        Self::FontStep1,
        Self::FontStep2,
        Self::FontStep3,
        Self::FontStep4,
        Self::LineRelaxed,
        Self::LineLoose,
        Self::LetterWide,
        Self::LetterWider,
        Self::HighContrast,
        Self::Grayscale,
        Self::InvertColors,
        Self::HighlightLinks,
        Self::EnhancedFocus,
        Self::ReduceMotion,
    ];

    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::FontStep0 => "a11y-font-0",
            Self::FontStep1 => "a11y-font-1",
            Self::FontStep2 => "a11y-font-2",
            Self::FontStep3 => "a11y-font-3",
            Self::FontStep4 => "a11y-font-4",
            Self::LineRelaxed => "a11y-line-relaxed",
            Self::LineLoose => "a11y-line-loose",
            Self::LetterWide => "a11y-letter-wide",
            Self::LetterWider => "a11y-letter-wider",
            Self::HighContrast => "a11y-high-contrast",
            Self::Grayscale => "a11y-grayscale",
            Self::InvertColors => "a11y-invert",
            Self::HighlightLinks => "a11y-highlight-links",
            Self::EnhancedFocus => "a11y-enhanced-focus",
            Self::ReduceMotion => "a11y-reduce-motion",
        }
    }

    /// Marker for a font step. The baseline step has its own identifier but
    /// is never applied, so step 0 renders at the browser's own size.
    #[must_use]
    pub const fn for_font_step(step: FontStep) -> Option<Self> {
        match step.get() {
            1 => Some(Self::FontStep1),
            2 => Some(Self::FontStep2),
            3 => Some(Self::FontStep3),
            4 => Some(Self::FontStep4),
            _ => None,
        }
    }

    #[must_use]
    pub const fn for_line_spacing(spacing: LineSpacing) -> Option<Self> {
        match spacing {
            LineSpacing::Default => None,
            LineSpacing::Relaxed => Some(Self::LineRelaxed),
            LineSpacing::Loose => Some(Self::LineLoose),
        }
    }

    #[must_use]
    pub const fn for_letter_spacing(spacing: LetterSpacing) -> Option<Self> {
        match spacing {
            LetterSpacing::Default => None,
            LetterSpacing::Wide => Some(Self::LetterWide),
            LetterSpacing::Wider => Some(Self::LetterWider),
        }
    }

    #[must_use]
    pub const fn for_toggle(toggle: PreferenceToggle) -> Self {
        match toggle {
            PreferenceToggle::HighContrast => Self::HighContrast,
            PreferenceToggle::Grayscale => Self::Grayscale,
            PreferenceToggle::InvertColors => Self::InvertColors,
            PreferenceToggle::HighlightLinks => Self::HighlightLinks,
            PreferenceToggle::EnhancedFocus => Self::EnhancedFocus,
            PreferenceToggle::ReduceMotion => Self::ReduceMotion,
        }
    }
}

/// Exactly the markers a state implies, in [`StyleMarker::ALL`] order.
#[must_use]
pub fn markers_for(state: &PreferenceState) -> MarkerSet {
    let mut set = MarkerSet::new();
    set.extend(StyleMarker::for_font_step(state.font_step));
    set.extend(StyleMarker::for_line_spacing(state.line_spacing));
    set.extend(StyleMarker::for_letter_spacing(state.letter_spacing));
    set.extend(
        PreferenceToggle::ALL
            .into_iter()
            .filter(|toggle| state.toggle_value(*toggle))
            .map(StyleMarker::for_toggle),
    );
    set
}

/// Element that carries style markers (the document root in a browser).
pub trait MarkerTarget {
    fn add_marker(&mut self, marker: StyleMarker);
    fn remove_marker(&mut self, marker: StyleMarker);
    fn has_marker(&self, marker: StyleMarker) -> bool;
}

/// Reconcile the target's markers with `state`.
pub fn apply_state<T>(target: &mut T, state: &PreferenceState)
where
    T: MarkerTarget + ?Sized,
{
    for marker in StyleMarker::ALL {
        target.remove_marker(marker);
    }
    for marker in markers_for(state) {
        target.add_marker(marker);
    }
}

/// In-memory marker target, used off the browser and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTarget {
    markers: BTreeSet<StyleMarker>,
}

impl MemoryTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> impl Iterator<Item = StyleMarker> + '_ {
        self.markers.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    #[must_use]
    pub fn class_names(&self) -> Vec<&'static str> {
        self.markers.iter().map(|m| m.class_name()).collect()
    }
}

impl MarkerTarget for MemoryTarget {
    fn add_marker(&mut self, marker: StyleMarker) {
        self.markers.insert(marker);
    }

    fn remove_marker(&mut self, marker: StyleMarker) {
        self.markers.remove(&marker);
    }

    fn has_marker(&self, marker: StyleMarker) -> bool {
        self.markers.contains(&marker)
    }
}
