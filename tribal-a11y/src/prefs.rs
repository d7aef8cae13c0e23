use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Largest font step a visitor can select.
pub const MAX_FONT_STEP: u8 = 4;

/// Percentage scale of the root font size for each step, baseline first.
pub const FONT_SCALE_PERCENT: [u16; 5] = [100, 113, 125, 138, 150];

/// Text-size step between the baseline (0) and [`MAX_FONT_STEP`].
///
/// Construction saturates: requests outside the range land on the nearest
/// boundary instead of wrapping or failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct FontStep(u8);

impl FontStep {
    pub const BASELINE: Self = Self(0);
    pub const MAX: Self = Self(MAX_FONT_STEP);
    pub const ALL: [Self; 5] = [Self(0), Self(1), Self(2), Self(3), Self(4)];

    /// Build a step from any integer, clamping into `0..=4`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_lossless)]
    pub const fn new(step: i64) -> Self {
        let clamped = if step < 0 {
            0
        } else if step > MAX_FONT_STEP as i64 {
            MAX_FONT_STEP as i64
        } else {
            step
        };
        Self(clamped as u8)
    }

    /// Build a step from a stored number, truncating toward zero and then
    /// clamping. Covers integers too large for `i64` and values written as
    /// floats.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_stored(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::BASELINE;
        }
        Self(raw.trunc().clamp(0.0, f64::from(MAX_FONT_STEP)) as u8)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_baseline(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn increase(self) -> Self {
        if self.0 >= MAX_FONT_STEP {
            self
        } else {
            Self(self.0 + 1)
        }
    }

    #[must_use]
    pub const fn decrease(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Root font size for this step, in percent of the browser default.
    #[must_use]
    pub const fn scale_percent(self) -> u16 {
        FONT_SCALE_PERCENT[self.0 as usize]
    }
}

impl<'de> Deserialize<'de> for FontStep {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Ok(Self::from_stored(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineSpacing {
    #[default]
    Default,
    Relaxed,
    Loose,
}

impl LineSpacing {
    pub const ALL: [Self; 3] = [Self::Default, Self::Relaxed, Self::Loose];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Relaxed => "relaxed",
            Self::Loose => "loose",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LetterSpacing {
    #[default]
    Default,
    Wide,
    Wider,
}

impl LetterSpacing {
    pub const ALL: [Self; 3] = [Self::Default, Self::Wide, Self::Wider];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Wide => "wide",
            Self::Wider => "wider",
        }
    }
}

/// The on/off preferences, one per boolean field of [`PreferenceState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PreferenceToggle {
    HighContrast,
    Grayscale,
    InvertColors,
    HighlightLinks,
    EnhancedFocus,
    ReduceMotion,
}

impl PreferenceToggle {
    pub const ALL: [Self; 6] = [
        Self::HighContrast,
        Self::Grayscale,
        Self::InvertColors,
        Self::HighlightLinks,
        Self::EnhancedFocus,
        Self::ReduceMotion,
    ];

    /// Field name used in the persisted JSON record.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::HighContrast => "highContrast",
            Self::Grayscale => "grayscale",
            Self::InvertColors => "invertColors",
            Self::HighlightLinks => "highlightLinks",
            Self::EnhancedFocus => "enhancedFocus",
            Self::ReduceMotion => "reduceMotion",
        }
    }
}

/// Display preferences chosen by a visitor.
///
/// Every field is independent; the only invariant is that each value sits in
/// its declared domain, which the field types enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceState {
    pub font_step: FontStep,
    pub line_spacing: LineSpacing,
    pub letter_spacing: LetterSpacing,
    pub high_contrast: bool,
    pub grayscale: bool,
    pub invert_colors: bool,
    pub highlight_links: bool,
    pub enhanced_focus: bool,
    pub reduce_motion: bool,
}

impl PreferenceState {
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite every field the patch names; the rest keep their value.
    pub fn apply_patch(&mut self, patch: &PreferencePatch) {
        if let Some(step) = patch.font_step {
            self.font_step = FontStep::new(i64::from(step));
        }
        if let Some(spacing) = patch.line_spacing {
            self.line_spacing = spacing;
        }
        if let Some(spacing) = patch.letter_spacing {
            self.letter_spacing = spacing;
        }
        for (toggle, value) in patch.toggles() {
            *self.toggle_slot(toggle) = value;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub const fn toggle_value(&self, toggle: PreferenceToggle) -> bool {
        match toggle {
            PreferenceToggle::HighContrast => self.high_contrast,
            PreferenceToggle::Grayscale => self.grayscale,
            PreferenceToggle::InvertColors => self.invert_colors,
            PreferenceToggle::HighlightLinks => self.highlight_links,
            PreferenceToggle::EnhancedFocus => self.enhanced_focus,
            PreferenceToggle::ReduceMotion => self.reduce_motion,
        }
    }

    fn toggle_slot(&mut self, toggle: PreferenceToggle) -> &mut bool {
        match toggle {
            PreferenceToggle::HighContrast => &mut self.high_contrast,
            PreferenceToggle::Grayscale => &mut self.grayscale,
            PreferenceToggle::InvertColors => &mut self.invert_colors,
            PreferenceToggle::HighlightLinks => &mut self.highlight_links,
            PreferenceToggle::EnhancedFocus => &mut self.enhanced_focus,
            PreferenceToggle::ReduceMotion => &mut self.reduce_motion,
        }
    }

    /// Merge a stored JSON object onto the default record, one field at a time.
    ///
    /// Missing fields stay at their default, unknown fields are ignored and a
    /// field that fails to parse falls back to its default without affecting
    /// its neighbours.
    #[must_use]
    pub fn merged_onto_defaults(record: &Map<String, Value>) -> Self {
        let mut state = Self::default();
        merge_field(record, "fontStep", &mut state.font_step);
        merge_field(record, "lineSpacing", &mut state.line_spacing);
        merge_field(record, "letterSpacing", &mut state.letter_spacing);
        for toggle in PreferenceToggle::ALL {
            merge_field(record, toggle.key(), state.toggle_slot(toggle));
        }
        state
    }
}

fn merge_field<T: DeserializeOwned>(record: &Map<String, Value>, key: &str, slot: &mut T) {
    let Some(raw) = record.get(key) else {
        return;
    };
    match T::deserialize(raw) {
        Ok(value) => *slot = value,
        Err(err) => log::debug!("ignoring stored preference {key}: {err}"),
    }
}

/// Partial update of a [`PreferenceState`]. `None` leaves a field untouched.
///
/// The font step is carried as a raw integer so callers can ask for any step;
/// the merge clamps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreferencePatch {
    pub font_step: Option<i32>,
    pub line_spacing: Option<LineSpacing>,
    pub letter_spacing: Option<LetterSpacing>,
    pub high_contrast: Option<bool>,
    pub grayscale: Option<bool>,
    pub invert_colors: Option<bool>,
    pub highlight_links: Option<bool>,
    pub enhanced_focus: Option<bool>,
    pub reduce_motion: Option<bool>,
}

impl PreferencePatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn font_step(mut self, step: i32) -> Self {
        self.font_step = Some(step);
        self
    }

    #[must_use]
    pub const fn line_spacing(mut self, spacing: LineSpacing) -> Self {
        self.line_spacing = Some(spacing);
        self
    }

    #[must_use]
    pub const fn letter_spacing(mut self, spacing: LetterSpacing) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    #[must_use]
    pub const fn toggle(mut self, toggle: PreferenceToggle, value: bool) -> Self {
        match toggle {
            PreferenceToggle::HighContrast => self.high_contrast = Some(value),
            PreferenceToggle::Grayscale => self.grayscale = Some(value),
            PreferenceToggle::InvertColors => self.invert_colors = Some(value),
            PreferenceToggle::HighlightLinks => self.highlight_links = Some(value),
            PreferenceToggle::EnhancedFocus => self.enhanced_focus = Some(value),
            PreferenceToggle::ReduceMotion => self.reduce_motion = Some(value),
        }
        self
    }

    #[must_use]
    pub const fn high_contrast(self, value: bool) -> Self {
        self.toggle(PreferenceToggle::HighContrast, value)
    }

    fn toggles(&self) -> impl Iterator<Item = (PreferenceToggle, bool)> {
        let values = [
            self.high_contrast,
            self.grayscale,
            self.invert_colors,
            self.highlight_links,
            self.enhanced_focus,
            self.reduce_motion,
        ];
        PreferenceToggle::ALL
            .into_iter()
            .zip(values)
            .filter_map(|(toggle, value)| value.map(|v| (toggle, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: &Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn default_record_is_default() {
        let state = PreferenceState::default();
        assert!(state.is_default());
        assert_eq!(state.font_step, FontStep::BASELINE);
        assert_eq!(state.line_spacing, LineSpacing::Default);
        assert_eq!(state.letter_spacing, LetterSpacing::Default);
        assert!(PreferenceToggle::ALL.iter().all(|t| !state.toggle_value(*t)));
    }

    #[test]
    fn any_single_change_clears_is_default() {
        let patches = [
            PreferencePatch::new().font_step(1),
            PreferencePatch::new().line_spacing(LineSpacing::Loose),
            PreferencePatch::new().letter_spacing(LetterSpacing::Wide),
        ]
        .into_iter()
        .chain(
            PreferenceToggle::ALL
                .into_iter()
                .map(|t| PreferencePatch::new().toggle(t, true)),
        );
        for patch in patches {
            let mut state = PreferenceState::default();
            state.apply_patch(&patch);
            assert!(!state.is_default(), "{patch:?} should mark state modified");
            state.reset();
            assert!(state.is_default());
        }
    }

    #[test]
    fn font_step_saturates_on_write() {
        let mut state = PreferenceState::default();
        state.apply_patch(&PreferencePatch::new().font_step(7));
        assert_eq!(state.font_step.get(), 4);
        state.apply_patch(&PreferencePatch::new().font_step(-3));
        assert_eq!(state.font_step.get(), 0);
        assert_eq!(FontStep::new(i64::MAX), FontStep::MAX);
        assert_eq!(FontStep::new(i64::MIN), FontStep::BASELINE);
    }

    #[test]
    fn font_step_increase_and_decrease_stop_at_bounds() {
        assert_eq!(FontStep::MAX.increase(), FontStep::MAX);
        assert_eq!(FontStep::BASELINE.decrease(), FontStep::BASELINE);
        assert_eq!(FontStep::new(2).increase().get(), 3);
        assert_eq!(FontStep::new(2).decrease().get(), 1);
    }

    #[test]
    fn scale_percentages_follow_step_table() {
        let scales: Vec<u16> = FontStep::ALL.iter().map(|s| s.scale_percent()).collect();
        assert_eq!(scales, vec![100, 113, 125, 138, 150]);
    }

    #[test]
    fn patch_leaves_unnamed_fields_alone() {
        let mut state = PreferenceState::default();
        state.apply_patch(
            &PreferencePatch::new()
                .font_step(2)
                .toggle(PreferenceToggle::Grayscale, true),
        );
        state.apply_patch(&PreferencePatch::new().high_contrast(true));
        assert_eq!(state.font_step.get(), 2);
        assert!(state.grayscale);
        assert!(state.high_contrast);
        assert!(!state.invert_colors);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut state = PreferenceState::default();
        state.apply_patch(
            &PreferencePatch::new()
                .font_step(3)
                .line_spacing(LineSpacing::Relaxed)
                .toggle(PreferenceToggle::ReduceMotion, true),
        );
        let value = serde_json::to_value(state).unwrap();
        assert_eq!(value["fontStep"], json!(3));
        assert_eq!(value["lineSpacing"], json!("relaxed"));
        assert_eq!(value["letterSpacing"], json!("default"));
        assert_eq!(value["reduceMotion"], json!(true));
    }

    #[test]
    fn merge_keeps_good_fields_when_one_is_corrupt() {
        let state = PreferenceState::merged_onto_defaults(&record(&json!({
            "fontStep": "huge",
            "lineSpacing": "loose",
            "letterSpacing": "sideways",
            "grayscale": 1,
            "highlightLinks": true,
            "someFutureField": [1, 2, 3]
        })));
        assert_eq!(state.font_step, FontStep::BASELINE);
        assert_eq!(state.line_spacing, LineSpacing::Loose);
        assert_eq!(state.letter_spacing, LetterSpacing::Default);
        assert!(!state.grayscale);
        assert!(state.highlight_links);
    }

    #[test]
    fn merge_clamps_stored_font_step() {
        let state = PreferenceState::merged_onto_defaults(&record(&json!({ "fontStep": 12 })));
        assert_eq!(state.font_step, FontStep::MAX);
        let state = PreferenceState::merged_onto_defaults(&record(&json!({ "fontStep": -1 })));
        assert_eq!(state.font_step, FontStep::BASELINE);

        for (raw, expected) in [
            (r#"{"fontStep":99999999999999999999}"#, 4),
            (r#"{"fontStep":1e30}"#, 4),
            (r#"{"fontStep":-1e30}"#, 0),
            (r#"{"fontStep":3.0}"#, 3),
            (r#"{"fontStep":2.7}"#, 2),
        ] {
            let value: Value = serde_json::from_str(raw).unwrap();
            let state = PreferenceState::merged_onto_defaults(&record(&value));
            assert_eq!(state.font_step.get(), expected, "{raw}");
        }
    }

    #[test]
    fn non_numeric_stored_font_step_falls_back() {
        for value in [json!("3"), json!(true), json!(null), json!([2])] {
            let state =
                PreferenceState::merged_onto_defaults(&record(&json!({ "fontStep": value })));
            assert_eq!(state.font_step, FontStep::BASELINE, "{value}");
        }
    }
}
