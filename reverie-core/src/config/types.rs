//! Setting value types
//!
//! Each type keeps its own valid range. Construction from raw values clamps
//! (or snaps) into range instead of failing, and the step helpers used by
//! the editing overlays never leave it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of reality-check kinds
pub const CHECK_KIND_COUNT: usize = 9;

/// Prompted reality check shown when an alarm fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CheckKind {
    /// Push a finger against the opposite palm
    #[default]
    FingerPalm,
    /// Read text, look away, read it again
    TextStability,
    /// Pinch the nose and try to breathe
    NoseBreathing,
    /// Look at the clock twice
    DigitalClock,
    /// Look at a reflection
    MirrorTest,
    /// Jump or push and check the physics
    ImuPhysics,
    /// Flip a light switch
    LightSwitch,
    /// Count fingers
    HandCount,
    /// Recall how you got here
    MemoryRecall,
}

impl CheckKind {
    /// All kinds in index order
    pub const ALL: [CheckKind; CHECK_KIND_COUNT] = [
        CheckKind::FingerPalm,
        CheckKind::TextStability,
        CheckKind::NoseBreathing,
        CheckKind::DigitalClock,
        CheckKind::MirrorTest,
        CheckKind::ImuPhysics,
        CheckKind::LightSwitch,
        CheckKind::HandCount,
        CheckKind::MemoryRecall,
    ];

    /// Position in [`CheckKind::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kind at `index`, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next kind, wrapping
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % CHECK_KIND_COUNT]
    }

    /// Previous kind, wrapping
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + CHECK_KIND_COUNT - 1) % CHECK_KIND_COUNT]
    }

    /// Short human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            CheckKind::FingerPalm => "Finger/Palm",
            CheckKind::TextStability => "Text",
            CheckKind::NoseBreathing => "Nose Breath",
            CheckKind::DigitalClock => "Clock",
            CheckKind::MirrorTest => "Mirror",
            CheckKind::ImuPhysics => "Physics",
            CheckKind::LightSwitch => "Light Switch",
            CheckKind::HandCount => "Hand Count",
            CheckKind::MemoryRecall => "Memory",
        }
    }
}

/// Set of enabled check kinds, one bit per [`CheckKind::index`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckKindSet(u16);

impl CheckKindSet {
    const MASK: u16 = (1 << CHECK_KIND_COUNT) - 1;

    /// Every kind enabled
    pub const ALL: Self = Self(Self::MASK);

    /// No kind enabled
    pub const EMPTY: Self = Self(0);

    /// Build from raw bits; bits past the last kind are dropped
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & Self::MASK)
    }

    /// Raw bits
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Whether `kind` is enabled
    pub const fn contains(self, kind: CheckKind) -> bool {
        self.0 & (1 << kind as u16) != 0
    }

    /// Enable or disable `kind`
    pub fn set(&mut self, kind: CheckKind, enabled: bool) {
        if enabled {
            self.0 |= 1 << kind as u16;
        } else {
            self.0 &= !(1 << kind as u16);
        }
    }

    /// Number of enabled kinds
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True when no kind is enabled
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The `n`th enabled kind in index order
    pub fn nth(self, n: usize) -> Option<CheckKind> {
        CheckKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.contains(*kind))
            .nth(n)
    }
}

impl Default for CheckKindSet {
    fn default() -> Self {
        Self::ALL
    }
}

/// Screen-off timeout, restricted to the supported step table
///
/// Zero means the screen stays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreenTimeout(u16);

impl ScreenTimeout {
    /// Supported timeouts in seconds, in stepping order
    pub const STEPS: [u16; 17] = [
        0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60, 120, 180, 240, 300,
    ];

    /// Never turn the screen off
    pub const ALWAYS_ON: Self = Self(0);

    /// Snap `secs` down to the nearest supported step
    pub fn from_secs(secs: u16) -> Self {
        let step = Self::STEPS
            .iter()
            .copied()
            .filter(|s| *s <= secs)
            .last()
            .unwrap_or(0);
        Self(step)
    }

    /// Timeout in seconds (0 = always on)
    pub const fn as_secs(self) -> u16 {
        self.0
    }

    /// Timeout in milliseconds, or `None` when the screen stays on
    pub const fn as_millis(self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0 as u32 * 1000)
        }
    }

    fn position(self) -> usize {
        Self::STEPS.iter().position(|s| *s == self.0).unwrap_or(0)
    }

    /// Next longer step, wrapping to always-on after the longest
    pub fn next(self) -> Self {
        Self(Self::STEPS[(self.position() + 1) % Self::STEPS.len()])
    }

    /// Next shorter step, wrapping
    pub fn prev(self) -> Self {
        let len = Self::STEPS.len();
        Self(Self::STEPS[(self.position() + len - 1) % len])
    }
}

impl Default for ScreenTimeout {
    fn default() -> Self {
        Self(15)
    }
}

/// Shake-to-wake sensitivity level
///
/// Lower levels wake on lighter movement. The top level disables motion
/// wake altogether.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sensitivity(u8);

impl Sensitivity {
    /// Per-axis wake thresholds in milli-g, indexed by level
    const THRESHOLDS_MG: [u32; 6] = [150, 300, 500, 800, 1200, 1800];

    /// Level at which only buttons wake the screen
    pub const BUTTON_ONLY: Self = Self(6);

    /// Create a level, clamping into 0-6
    pub const fn new(level: u8) -> Self {
        Self(if level > Self::BUTTON_ONLY.0 { Self::BUTTON_ONLY.0 } else { level })
    }

    /// Raw level
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Per-axis delta that counts as a wake gesture, or `None` for button-only
    pub fn threshold_mg(self) -> Option<u32> {
        Self::THRESHOLDS_MG.get(self.0 as usize).copied()
    }

    /// One step firmer (towards button-only)
    pub const fn firmer(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// One step lighter
    pub const fn lighter(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Short human-readable name
    pub const fn name(self) -> &'static str {
        match self.0 {
            0 => "Light Tap",
            1 => "Gentle",
            2 => "Normal",
            3 => "Firm",
            4 => "Hard",
            5 => "Very Hard",
            _ => "Button Only",
        }
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self(2)
    }
}

/// Backlight brightness level, 0-10
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Brightness(u8);

impl Brightness {
    const PWM: [u8; 11] = [25, 50, 75, 100, 125, 150, 175, 200, 225, 250, 255];

    /// Highest level
    pub const MAX: u8 = 10;

    /// Create a level, clamping into 0-10
    pub const fn new(level: u8) -> Self {
        Self(if level > Self::MAX { Self::MAX } else { level })
    }

    /// Raw level
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Backlight PWM duty (0-255) for this level; never fully dark
    pub const fn pwm(self) -> u8 {
        Self::PWM[self.0 as usize]
    }

    /// Brightness as a percentage
    pub const fn percent(self) -> u8 {
        self.0 * 10
    }

    /// One level brighter
    pub const fn brighter(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// One level dimmer
    pub const fn dimmer(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(8)
    }
}

/// Colour of the main clock face digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockColor {
    #[default]
    White,
    Cyan,
    Green,
    Yellow,
    Orange,
    Magenta,
    Red,
    Blue,
}

impl ClockColor {
    const ALL: [ClockColor; 8] = [
        ClockColor::White,
        ClockColor::Cyan,
        ClockColor::Green,
        ClockColor::Yellow,
        ClockColor::Orange,
        ClockColor::Magenta,
        ClockColor::Red,
        ClockColor::Blue,
    ];

    /// Next colour, wrapping
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    /// Previous colour, wrapping
    pub fn prev(self) -> Self {
        Self::ALL[(self as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Colour as RGB565
    pub const fn rgb565(self) -> u16 {
        match self {
            ClockColor::White => 0xFFFF,
            ClockColor::Cyan => 0x07FF,
            ClockColor::Green => 0x07E0,
            ClockColor::Yellow => 0xFFE0,
            ClockColor::Orange => 0xFD20,
            ClockColor::Magenta => 0xF81F,
            ClockColor::Red => 0xF800,
            ClockColor::Blue => 0x001F,
        }
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            ClockColor::White => "White",
            ClockColor::Cyan => "Cyan",
            ClockColor::Green => "Green",
            ClockColor::Yellow => "Yellow",
            ClockColor::Orange => "Orange",
            ClockColor::Magenta => "Magenta",
            ClockColor::Red => "Red",
            ClockColor::Blue => "Blue",
        }
    }
}

/// 12- or 24-hour clock display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeFormat {
    #[default]
    TwentyFourHour,
    TwelveHour,
}

impl TimeFormat {
    /// The other format
    pub const fn toggled(self) -> Self {
        match self {
            TimeFormat::TwentyFourHour => TimeFormat::TwelveHour,
            TimeFormat::TwelveHour => TimeFormat::TwentyFourHour,
        }
    }
}

/// Hours during which alarms are rescheduled instead of fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuietHours {
    /// Whether suppression applies at all
    pub enabled: bool,
    /// First quiet hour (inclusive)
    pub start_hour: u8,
    /// First hour after the window (exclusive)
    pub end_hour: u8,
}

impl QuietHours {
    /// Create an enabled window
    pub const fn new(start_hour: u8, end_hour: u8) -> Self {
        Self {
            enabled: true,
            start_hour: start_hour % 24,
            end_hour: end_hour % 24,
        }
    }

    /// Whether `hour` falls inside the window
    ///
    /// A window with `start > end` wraps past midnight. Equal bounds
    /// describe an empty window.
    pub const fn contains(&self, hour: u8) -> bool {
        if !self.enabled {
            return false;
        }
        let (s, e) = (self.start_hour, self.end_hour);
        if s > e {
            hour >= s || hour < e
        } else {
            s <= hour && hour < e
        }
    }
}

impl Default for QuietHours {
    fn default() -> Self {
        Self::new(23, 7)
    }
}

/// Fixed daily alarm that opens the dream journal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MorningAlarm {
    pub enabled: bool,
    pub hour: u8,
    pub minute: u8,
}

impl MorningAlarm {
    /// Whether the alarm is enabled and set to `hour:minute`
    pub const fn matches(&self, hour: u8, minute: u8) -> bool {
        self.enabled && self.hour == hour && self.minute == minute
    }
}

impl Default for MorningAlarm {
    fn default() -> Self {
        Self {
            enabled: false,
            hour: 7,
            minute: 0,
        }
    }
}
