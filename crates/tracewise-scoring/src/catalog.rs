//! Built-in exercises: letters, digits, shapes, and dot patterns.
//!
//! All coordinates are laid out on [`Dimensions::CANVAS`](crate::Dimensions::CANVAS)
//! (420 x 330). Letter and digit guides are single polylines that double
//! back over shared strokes, since the scorer only cares about the set of
//! segments the learner should cover.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attempt::{DEFAULT_MIN_STROKE_POINTS, SHAPE_MIN_STROKE_POINTS};
use crate::types::{Guide, Point, ScoringError};

/// Tracing shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Circle of radius 115.
    Circle,
    /// Axis-aligned square.
    Square,
    /// Upright triangle.
    Triangle,
    /// Five-pointed star.
    Star,
    /// Heart built from two arcs and a tip.
    Heart,
    /// Diamond (rhombus).
    Diamond,
}

impl ShapeKind {
    /// Every shape, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Circle,
        Self::Square,
        Self::Triangle,
        Self::Star,
        Self::Heart,
        Self::Diamond,
    ];

    /// Lowercase identifier used in exercise ids.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Star => "star",
            Self::Heart => "heart",
            Self::Diamond => "diamond",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Square => "Square",
            Self::Triangle => "Triangle",
            Self::Star => "Star",
            Self::Heart => "Heart",
            Self::Diamond => "Diamond",
        }
    }

    /// Where the learner is prompted to start drawing.
    #[must_use]
    pub const fn start(self) -> Point {
        match self {
            Self::Circle => Point::new(210.0, 50.0),
            Self::Square => Point::new(85.0, 52.0),
            Self::Triangle | Self::Diamond => Point::new(210.0, 40.0),
            Self::Star => Point::new(210.0, 38.0),
            Self::Heart => Point::new(134.0, 52.0),
        }
    }

    /// Guide waypoints for this shape.
    #[must_use]
    pub fn guide(self) -> Guide {
        match self {
            Self::Circle => {
                // One waypoint every 8 degrees, closing back on 0.
                Guide::new(
                    (0..=45_i32)
                        .map(|i| {
                            let r = f64::from(i * 8) * PI / 180.0;
                            Point::new(
                                115.0_f64.mul_add(r.cos(), 210.0),
                                115.0_f64.mul_add(r.sin(), 165.0),
                            )
                        })
                        .collect(),
                )
            }
            Self::Square => Guide::from_pairs(SQUARE),
            Self::Triangle => Guide::from_pairs(TRIANGLE),
            Self::Star => Guide::from_pairs(STAR),
            Self::Heart => heart_guide(),
            Self::Diamond => Guide::from_pairs(DIAMOND),
        }
    }
}

/// Left lobe from 140 down to -25 degrees, right lobe from 205 up to
/// 370 degrees, then the bottom tip.
fn heart_guide() -> Guide {
    let arc = |cx: f64, degrees: i32| {
        let r = f64::from(degrees) * PI / 180.0;
        Point::new(78.0_f64.mul_add(r.cos(), cx), 72.0_f64.mul_add(r.sin(), 112.0))
    };

    let left = (0..)
        .map(|i| 140 - i * 8)
        .take_while(|&a| a >= -25)
        .map(|a| arc(134.0, a));
    let right = (0..)
        .map(|i| 205 + i * 8)
        .take_while(|&a| a <= 370)
        .map(|a| arc(286.0, a));

    Guide::new(
        left.chain(right)
            .chain(std::iter::once(Point::new(210.0, 268.0)))
            .collect(),
    )
}

/// Dot-connection patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DotPatternKind {
    /// Eight dots around a dog's head.
    Dog,
    /// Five-dot house outline.
    House,
    /// Ten-dot star.
    Star,
    /// Eight-dot fish.
    Fish,
}

impl DotPatternKind {
    /// Every pattern, in menu order.
    pub const ALL: [Self; 4] = [Self::Dog, Self::House, Self::Star, Self::Fish];

    /// Lowercase identifier used in exercise ids.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::House => "house",
            Self::Star => "star",
            Self::Fish => "fish",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::House => "House",
            Self::Star => "Star",
            Self::Fish => "Fish",
        }
    }

    /// Target dots in the order they must be tapped.
    #[must_use]
    pub fn dots(self) -> Vec<Point> {
        let pairs: &[(f64, f64)] = match self {
            Self::Dog => DOG_DOTS,
            Self::House => HOUSE_DOTS,
            Self::Star => STAR_DOTS,
            Self::Fish => FISH_DOTS,
        };
        pairs.iter().copied().map(Point::from).collect()
    }
}

/// Identifies one built-in exercise.
///
/// Written as `letter:A`, `digit:7`, `shape:star`, or `dots:fish`.
///
/// ```
/// use tracewise_scoring::ExerciseId;
///
/// let id: ExerciseId = "letter:b".parse().unwrap();
/// assert_eq!(id, ExerciseId::Letter('B'));
/// assert_eq!(id.to_string(), "letter:B");
/// assert!(id.guide().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseId {
    /// Uppercase letter `A`-`Z`.
    Letter(char),
    /// Digit `0`-`9`.
    Digit(char),
    /// Tracing shape.
    Shape(ShapeKind),
    /// Dot-connection pattern.
    DotPattern(DotPatternKind),
}

impl ExerciseId {
    /// Every built-in exercise: letters, digits, shapes, then dot patterns.
    #[must_use]
    pub fn all() -> Vec<Self> {
        ('A'..='Z')
            .map(Self::Letter)
            .chain(('0'..='9').map(Self::Digit))
            .chain(ShapeKind::ALL.into_iter().map(Self::Shape))
            .chain(DotPatternKind::ALL.into_iter().map(Self::DotPattern))
            .collect()
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Self::Letter(c) | Self::Digit(c) => c.to_string(),
            Self::Shape(s) => s.name().to_string(),
            Self::DotPattern(p) => p.name().to_string(),
        }
    }

    /// Whether this exercise is traced over a guide.
    #[must_use]
    pub const fn is_tracing(self) -> bool {
        !matches!(self, Self::DotPattern(_))
    }

    /// Shortest stroke the exercise's canvas keeps on pen-up. Letters and
    /// digits keep taps; shapes drop them.
    #[must_use]
    pub const fn min_stroke_points(self) -> usize {
        match self {
            Self::Shape(_) => SHAPE_MIN_STROKE_POINTS,
            Self::Letter(_) | Self::Digit(_) | Self::DotPattern(_) => DEFAULT_MIN_STROKE_POINTS,
        }
    }

    /// Guide waypoints for a tracing exercise.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::NotATracingExercise`] for dot patterns and
    /// [`ScoringError::UnknownExercise`] for a letter or digit outside the
    /// catalog.
    pub fn guide(self) -> Result<Guide, ScoringError> {
        match self {
            Self::Letter(c) => {
                let pairs = table_entry(&LETTER_GUIDES, c, 'A')
                    .ok_or_else(|| ScoringError::UnknownExercise(self.to_string()))?;
                Ok(Guide::from_pairs(pairs))
            }
            Self::Digit(c) => {
                let pairs = table_entry(&DIGIT_GUIDES, c, '0')
                    .ok_or_else(|| ScoringError::UnknownExercise(self.to_string()))?;
                Ok(Guide::from_pairs(pairs))
            }
            Self::Shape(s) => Ok(s.guide()),
            Self::DotPattern(_) => Err(ScoringError::NotATracingExercise(self.to_string())),
        }
    }

    /// Target dots for a dot pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::NotADotPattern`] for tracing exercises.
    pub fn dots(self) -> Result<Vec<Point>, ScoringError> {
        match self {
            Self::DotPattern(p) => Ok(p.dots()),
            _ => Err(ScoringError::NotADotPattern(self.to_string())),
        }
    }
}

/// Look up `c` in a table indexed from `first`.
fn table_entry<'a>(table: &[&'a [(f64, f64)]], c: char, first: char) -> Option<&'a [(f64, f64)]> {
    let index = u32::from(c).checked_sub(u32::from(first))?;
    table.get(usize::try_from(index).ok()?).copied()
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "letter:{c}"),
            Self::Digit(c) => write!(f, "digit:{c}"),
            Self::Shape(s) => write!(f, "shape:{}", s.slug()),
            Self::DotPattern(p) => write!(f, "dots:{}", p.slug()),
        }
    }
}

impl FromStr for ExerciseId {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ScoringError::UnknownExercise(s.to_string());
        let (kind, value) = s.split_once(':').ok_or_else(unknown)?;
        let single = || {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        };

        match kind.to_ascii_lowercase().as_str() {
            "letter" => single()
                .map(|c| c.to_ascii_uppercase())
                .filter(char::is_ascii_uppercase)
                .map(Self::Letter)
                .ok_or_else(unknown),
            "digit" => single()
                .filter(char::is_ascii_digit)
                .map(Self::Digit)
                .ok_or_else(unknown),
            "shape" => ShapeKind::ALL
                .into_iter()
                .find(|k| k.slug().eq_ignore_ascii_case(value))
                .map(Self::Shape)
                .ok_or_else(unknown),
            "dots" => DotPatternKind::ALL
                .into_iter()
                .find(|k| k.slug().eq_ignore_ascii_case(value))
                .map(Self::DotPattern)
                .ok_or_else(unknown),
            _ => Err(unknown()),
        }
    }
}

/// Letter guides, indexed from `A`.
#[rustfmt::skip]
const LETTER_GUIDES: [&[(f64, f64)]; 26] = [
    // A
    &[
        (210.0, 40.0), (175.0, 112.0), (155.0, 170.0), (120.0, 285.0), (210.0, 40.0),
        (245.0, 112.0), (265.0, 170.0), (300.0, 285.0), (148.0, 195.0), (172.0, 195.0),
        (210.0, 195.0), (248.0, 195.0), (272.0, 195.0),
    ],
    // B
    &[
        (120.0, 40.0), (120.0, 285.0), (120.0, 40.0), (175.0, 42.0), (210.0, 48.0), (235.0, 62.0),
        (248.0, 85.0), (248.0, 105.0), (238.0, 125.0), (215.0, 138.0), (120.0, 138.0),
        (215.0, 138.0), (240.0, 152.0), (255.0, 172.0), (255.0, 195.0), (242.0, 218.0),
        (218.0, 242.0), (188.0, 260.0), (155.0, 268.0), (120.0, 268.0),
    ],
    // C
    &[
        (295.0, 88.0), (270.0, 60.0), (242.0, 45.0), (210.0, 38.0), (175.0, 42.0), (145.0, 55.0),
        (118.0, 78.0), (100.0, 108.0), (92.0, 142.0), (92.0, 178.0), (102.0, 212.0),
        (120.0, 242.0), (148.0, 265.0), (178.0, 278.0), (210.0, 285.0), (245.0, 280.0),
        (272.0, 265.0), (292.0, 248.0),
    ],
    // D
    &[
        (120.0, 40.0), (120.0, 285.0), (120.0, 40.0), (162.0, 42.0), (200.0, 50.0), (232.0, 65.0),
        (258.0, 88.0), (272.0, 118.0), (278.0, 148.0), (278.0, 175.0), (268.0, 205.0),
        (248.0, 232.0), (222.0, 252.0), (192.0, 265.0), (158.0, 272.0), (120.0, 272.0),
    ],
    // E
    &[
        (280.0, 40.0), (200.0, 40.0), (155.0, 40.0), (120.0, 40.0), (120.0, 100.0), (120.0, 162.0),
        (175.0, 162.0), (218.0, 162.0), (120.0, 162.0), (120.0, 220.0), (120.0, 285.0),
        (175.0, 285.0), (225.0, 285.0), (280.0, 285.0),
    ],
    // F
    &[
        (280.0, 40.0), (200.0, 40.0), (120.0, 40.0), (120.0, 100.0), (120.0, 162.0),
        (175.0, 162.0), (218.0, 162.0), (120.0, 162.0), (120.0, 220.0), (120.0, 285.0),
    ],
    // G
    &[
        (295.0, 88.0), (270.0, 60.0), (242.0, 45.0), (210.0, 38.0), (175.0, 42.0), (145.0, 55.0),
        (118.0, 78.0), (100.0, 108.0), (92.0, 142.0), (92.0, 178.0), (102.0, 212.0),
        (120.0, 242.0), (148.0, 265.0), (178.0, 278.0), (210.0, 285.0), (245.0, 280.0),
        (272.0, 265.0), (295.0, 245.0), (298.0, 215.0), (298.0, 188.0), (262.0, 188.0),
        (225.0, 188.0),
    ],
    // H
    &[
        (120.0, 40.0), (120.0, 100.0), (120.0, 162.0), (120.0, 220.0), (120.0, 285.0),
        (120.0, 162.0), (175.0, 162.0), (220.0, 162.0), (265.0, 162.0), (300.0, 162.0),
        (300.0, 100.0), (300.0, 40.0), (300.0, 220.0), (300.0, 285.0),
    ],
    // I
    &[
        (165.0, 40.0), (210.0, 40.0), (255.0, 40.0), (210.0, 40.0), (210.0, 100.0), (210.0, 162.0),
        (210.0, 220.0), (210.0, 285.0), (165.0, 285.0), (210.0, 285.0), (255.0, 285.0),
    ],
    // J
    &[
        (255.0, 40.0), (300.0, 40.0), (300.0, 100.0), (300.0, 162.0), (300.0, 220.0),
        (295.0, 248.0), (278.0, 268.0), (252.0, 280.0), (220.0, 285.0), (188.0, 280.0),
        (162.0, 262.0), (148.0, 238.0),
    ],
    // K
    &[
        (120.0, 40.0), (120.0, 100.0), (120.0, 162.0), (120.0, 220.0), (120.0, 285.0),
        (120.0, 162.0), (162.0, 132.0), (205.0, 100.0), (255.0, 65.0), (295.0, 40.0),
        (120.0, 162.0), (165.0, 192.0), (208.0, 222.0), (255.0, 255.0), (295.0, 285.0),
    ],
    // L
    &[
        (120.0, 40.0), (120.0, 100.0), (120.0, 162.0), (120.0, 220.0), (120.0, 285.0),
        (165.0, 285.0), (210.0, 285.0), (255.0, 285.0), (280.0, 285.0),
    ],
    // M
    &[
        (120.0, 40.0), (120.0, 100.0), (120.0, 162.0), (120.0, 220.0), (120.0, 285.0),
        (120.0, 40.0), (165.0, 90.0), (210.0, 135.0), (255.0, 90.0), (300.0, 40.0), (300.0, 100.0),
        (300.0, 162.0), (300.0, 220.0), (300.0, 285.0),
    ],
    // N
    &[
        (120.0, 40.0), (120.0, 100.0), (120.0, 162.0), (120.0, 220.0), (120.0, 285.0),
        (120.0, 40.0), (165.0, 82.0), (210.0, 125.0), (255.0, 168.0), (300.0, 210.0),
        (300.0, 285.0), (300.0, 220.0), (300.0, 162.0), (300.0, 100.0), (300.0, 40.0),
    ],
    // O
    &[
        (210.0, 40.0), (172.0, 45.0), (142.0, 62.0), (115.0, 88.0), (100.0, 118.0), (92.0, 150.0),
        (92.0, 178.0), (100.0, 210.0), (118.0, 240.0), (142.0, 262.0), (172.0, 278.0),
        (210.0, 285.0), (248.0, 278.0), (278.0, 262.0), (302.0, 240.0), (318.0, 210.0),
        (325.0, 178.0), (325.0, 150.0), (318.0, 118.0), (302.0, 88.0), (278.0, 62.0),
        (248.0, 45.0), (210.0, 40.0),
    ],
    // P
    &[
        (120.0, 40.0), (120.0, 100.0), (120.0, 162.0), (120.0, 220.0), (120.0, 285.0),
        (120.0, 40.0), (175.0, 42.0), (215.0, 52.0), (245.0, 70.0), (258.0, 95.0), (258.0, 120.0),
        (245.0, 145.0), (215.0, 158.0), (175.0, 165.0), (120.0, 165.0),
    ],
    // Q
    &[
        (210.0, 40.0), (172.0, 45.0), (142.0, 62.0), (115.0, 88.0), (100.0, 118.0), (92.0, 150.0),
        (92.0, 178.0), (100.0, 210.0), (118.0, 240.0), (142.0, 262.0), (172.0, 278.0),
        (210.0, 285.0), (248.0, 278.0), (278.0, 262.0), (302.0, 240.0), (318.0, 210.0),
        (325.0, 178.0), (325.0, 150.0), (318.0, 118.0), (302.0, 88.0), (278.0, 62.0),
        (248.0, 45.0), (210.0, 40.0), (245.0, 248.0), (268.0, 265.0), (295.0, 285.0),
        (310.0, 298.0),
    ],
    // R
    &[
        (120.0, 40.0), (120.0, 100.0), (120.0, 162.0), (120.0, 220.0), (120.0, 285.0),
        (120.0, 40.0), (175.0, 42.0), (215.0, 52.0), (245.0, 70.0), (258.0, 95.0), (258.0, 120.0),
        (245.0, 145.0), (215.0, 158.0), (175.0, 165.0), (120.0, 165.0), (165.0, 198.0),
        (205.0, 225.0), (248.0, 258.0), (285.0, 285.0),
    ],
    // S
    &[
        (295.0, 82.0), (272.0, 58.0), (248.0, 45.0), (218.0, 38.0), (185.0, 40.0), (158.0, 52.0),
        (135.0, 72.0), (122.0, 100.0), (122.0, 128.0), (135.0, 152.0), (162.0, 168.0),
        (195.0, 178.0), (228.0, 188.0), (258.0, 202.0), (278.0, 222.0), (285.0, 248.0),
        (278.0, 268.0), (258.0, 280.0), (228.0, 288.0), (195.0, 285.0), (162.0, 278.0),
        (138.0, 262.0), (118.0, 245.0),
    ],
    // T
    &[
        (120.0, 40.0), (165.0, 40.0), (210.0, 40.0), (255.0, 40.0), (300.0, 40.0), (210.0, 40.0),
        (210.0, 100.0), (210.0, 162.0), (210.0, 220.0), (210.0, 285.0),
    ],
    // U
    &[
        (120.0, 40.0), (120.0, 100.0), (120.0, 162.0), (120.0, 205.0), (122.0, 230.0),
        (132.0, 255.0), (150.0, 272.0), (175.0, 283.0), (210.0, 285.0), (245.0, 283.0),
        (270.0, 272.0), (288.0, 255.0), (298.0, 230.0), (300.0, 205.0), (300.0, 162.0),
        (300.0, 100.0), (300.0, 40.0),
    ],
    // V
    &[
        (120.0, 40.0), (145.0, 88.0), (170.0, 135.0), (190.0, 182.0), (210.0, 230.0),
        (210.0, 285.0), (230.0, 230.0), (250.0, 182.0), (270.0, 135.0), (285.0, 88.0),
        (300.0, 40.0),
    ],
    // W
    &[
        (120.0, 40.0), (135.0, 90.0), (155.0, 148.0), (175.0, 205.0), (195.0, 262.0),
        (210.0, 285.0), (225.0, 262.0), (245.0, 205.0), (265.0, 148.0), (285.0, 90.0),
        (300.0, 40.0),
    ],
    // X
    &[
        (120.0, 40.0), (148.0, 72.0), (175.0, 105.0), (200.0, 135.0), (235.0, 175.0),
        (265.0, 218.0), (285.0, 248.0), (300.0, 285.0), (210.0, 162.0), (120.0, 285.0),
        (148.0, 255.0), (175.0, 225.0), (200.0, 195.0), (235.0, 155.0), (265.0, 108.0),
        (285.0, 75.0), (300.0, 40.0),
    ],
    // Y
    &[
        (120.0, 40.0), (148.0, 72.0), (175.0, 105.0), (200.0, 138.0), (210.0, 162.0),
        (300.0, 40.0), (272.0, 72.0), (248.0, 105.0), (225.0, 138.0), (210.0, 162.0),
        (210.0, 220.0), (210.0, 285.0),
    ],
    // Z
    &[
        (120.0, 40.0), (175.0, 40.0), (228.0, 40.0), (280.0, 40.0), (300.0, 40.0), (278.0, 62.0),
        (255.0, 88.0), (228.0, 118.0), (200.0, 148.0), (172.0, 178.0), (148.0, 205.0),
        (125.0, 232.0), (120.0, 258.0), (120.0, 285.0), (175.0, 285.0), (228.0, 285.0),
        (280.0, 285.0), (300.0, 285.0),
    ],
];

/// Digit guides, indexed from `0`.
#[rustfmt::skip]
const DIGIT_GUIDES: [&[(f64, f64)]; 10] = [
    // 0
    &[
        (210.0, 40.0), (172.0, 45.0), (142.0, 62.0), (115.0, 88.0), (100.0, 118.0), (92.0, 150.0),
        (92.0, 178.0), (100.0, 210.0), (118.0, 240.0), (142.0, 262.0), (172.0, 278.0),
        (210.0, 285.0), (248.0, 278.0), (278.0, 262.0), (302.0, 240.0), (318.0, 210.0),
        (325.0, 178.0), (325.0, 150.0), (318.0, 118.0), (302.0, 88.0), (278.0, 62.0),
        (248.0, 45.0), (210.0, 40.0),
    ],
    // 1
    &[
        (170.0, 68.0), (192.0, 58.0), (212.0, 45.0), (212.0, 80.0), (212.0, 120.0), (212.0, 162.0),
        (212.0, 205.0), (212.0, 245.0), (212.0, 285.0), (178.0, 285.0), (248.0, 285.0),
    ],
    // 2
    &[
        (130.0, 92.0), (148.0, 68.0), (168.0, 52.0), (195.0, 40.0), (225.0, 40.0), (255.0, 52.0),
        (275.0, 72.0), (285.0, 98.0), (285.0, 122.0), (272.0, 145.0), (252.0, 165.0),
        (225.0, 185.0), (195.0, 205.0), (165.0, 225.0), (140.0, 248.0), (120.0, 272.0),
        (120.0, 285.0), (175.0, 285.0), (228.0, 285.0), (280.0, 285.0), (305.0, 285.0),
    ],
    // 3
    &[
        (132.0, 58.0), (155.0, 45.0), (182.0, 38.0), (215.0, 38.0), (248.0, 48.0), (272.0, 68.0),
        (282.0, 95.0), (278.0, 122.0), (260.0, 142.0), (238.0, 158.0), (215.0, 162.0),
        (238.0, 165.0), (262.0, 180.0), (280.0, 205.0), (285.0, 232.0), (275.0, 258.0),
        (255.0, 275.0), (225.0, 285.0), (195.0, 285.0), (168.0, 278.0), (142.0, 262.0),
    ],
    // 4
    &[
        (262.0, 42.0), (235.0, 72.0), (205.0, 108.0), (175.0, 148.0), (142.0, 188.0),
        (108.0, 188.0), (175.0, 188.0), (228.0, 188.0), (262.0, 188.0), (295.0, 188.0),
        (318.0, 188.0), (262.0, 188.0), (262.0, 220.0), (262.0, 252.0), (262.0, 285.0),
    ],
    // 5
    &[
        (295.0, 40.0), (265.0, 40.0), (235.0, 40.0), (205.0, 40.0), (172.0, 40.0), (140.0, 40.0),
        (120.0, 40.0), (112.0, 65.0), (108.0, 90.0), (108.0, 118.0), (115.0, 142.0),
        (132.0, 155.0), (158.0, 162.0), (188.0, 165.0), (218.0, 168.0), (248.0, 178.0),
        (268.0, 198.0), (278.0, 225.0), (275.0, 255.0), (258.0, 275.0), (230.0, 285.0),
        (200.0, 285.0), (172.0, 278.0), (148.0, 262.0), (128.0, 242.0),
    ],
    // 6
    &[
        (278.0, 72.0), (258.0, 50.0), (232.0, 38.0), (202.0, 35.0), (172.0, 40.0), (145.0, 55.0),
        (118.0, 80.0), (102.0, 112.0), (92.0, 148.0), (90.0, 185.0), (95.0, 222.0), (108.0, 255.0),
        (128.0, 272.0), (155.0, 283.0), (185.0, 288.0), (215.0, 285.0), (245.0, 275.0),
        (268.0, 255.0), (280.0, 228.0), (282.0, 198.0), (272.0, 168.0), (252.0, 148.0),
        (225.0, 135.0), (195.0, 130.0), (165.0, 135.0), (135.0, 148.0), (112.0, 168.0),
    ],
    // 7
    &[
        (122.0, 42.0), (162.0, 42.0), (205.0, 42.0), (248.0, 42.0), (292.0, 42.0), (305.0, 42.0),
        (288.0, 68.0), (268.0, 98.0), (245.0, 132.0), (220.0, 168.0), (198.0, 202.0),
        (175.0, 238.0), (158.0, 265.0), (145.0, 285.0),
    ],
    // 8
    &[
        (210.0, 162.0), (175.0, 155.0), (148.0, 138.0), (132.0, 112.0), (135.0, 85.0),
        (152.0, 62.0), (178.0, 48.0), (210.0, 42.0), (242.0, 48.0), (268.0, 62.0), (285.0, 85.0),
        (288.0, 112.0), (272.0, 138.0), (245.0, 155.0), (210.0, 162.0), (172.0, 170.0),
        (142.0, 188.0), (125.0, 212.0), (125.0, 242.0), (142.0, 265.0), (168.0, 280.0),
        (210.0, 285.0), (252.0, 280.0), (278.0, 265.0), (295.0, 242.0), (295.0, 212.0),
        (278.0, 188.0), (248.0, 170.0), (210.0, 162.0),
    ],
    // 9
    &[
        (210.0, 42.0), (178.0, 48.0), (152.0, 65.0), (132.0, 90.0), (122.0, 118.0), (125.0, 148.0),
        (142.0, 172.0), (168.0, 185.0), (200.0, 192.0), (232.0, 190.0), (260.0, 178.0),
        (278.0, 158.0), (288.0, 130.0), (285.0, 100.0), (268.0, 75.0), (248.0, 55.0),
        (222.0, 42.0), (195.0, 40.0), (212.0, 195.0), (215.0, 240.0), (212.0, 285.0),
    ],
];

#[rustfmt::skip]
const SQUARE: &[(f64, f64)] = &[
    (85.0, 52.0), (210.0, 52.0), (335.0, 52.0), (335.0, 140.0), (335.0, 278.0), (210.0, 278.0),
    (85.0, 278.0), (85.0, 140.0), (85.0, 52.0),
];

#[rustfmt::skip]
const TRIANGLE: &[(f64, f64)] = &[
    (210.0, 40.0), (252.0, 112.0), (295.0, 185.0), (335.0, 258.0), (272.0, 258.0),
    (210.0, 258.0), (148.0, 258.0), (85.0, 258.0), (127.0, 185.0), (168.0, 112.0),
    (210.0, 40.0),
];

#[rustfmt::skip]
const STAR: &[(f64, f64)] = &[
    (210.0, 38.0), (224.0, 92.0), (238.0, 145.0), (285.0, 145.0), (315.0, 145.0),
    (286.0, 168.0), (260.0, 190.0), (270.0, 240.0), (288.0, 292.0), (210.0, 252.0),
    (132.0, 292.0), (150.0, 240.0), (160.0, 190.0), (134.0, 168.0), (105.0, 145.0),
    (138.0, 145.0), (182.0, 145.0), (196.0, 92.0), (210.0, 38.0),
];

#[rustfmt::skip]
const DIAMOND: &[(f64, f64)] = &[
    (210.0, 38.0), (252.0, 88.0), (295.0, 138.0), (335.0, 165.0), (295.0, 192.0),
    (252.0, 242.0), (210.0, 292.0), (168.0, 242.0), (125.0, 192.0), (85.0, 165.0),
    (125.0, 138.0), (168.0, 88.0), (210.0, 38.0),
];

#[rustfmt::skip]
const DOG_DOTS: &[(f64, f64)] = &[
    (150.0, 80.0), (220.0, 55.0), (295.0, 80.0), (325.0, 155.0), (295.0, 225.0), (220.0, 250.0),
    (150.0, 225.0), (120.0, 155.0),
];

#[rustfmt::skip]
const HOUSE_DOTS: &[(f64, f64)] = &[
    (210.0, 55.0), (310.0, 130.0), (310.0, 255.0), (110.0, 255.0), (110.0, 130.0),
];

#[rustfmt::skip]
const STAR_DOTS: &[(f64, f64)] = &[
    (210.0, 45.0), (240.0, 150.0), (345.0, 150.0), (262.0, 212.0), (292.0, 315.0),
    (210.0, 252.0), (128.0, 315.0), (158.0, 212.0), (75.0, 150.0), (180.0, 150.0),
];

#[rustfmt::skip]
const FISH_DOTS: &[(f64, f64)] = &[
    (75.0, 155.0), (125.0, 105.0), (200.0, 80.0), (280.0, 105.0), (325.0, 155.0), (280.0, 205.0),
    (200.0, 230.0), (125.0, 205.0),
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{BoundingBox, Dimensions};

    #[test]
    fn only_shapes_drop_taps() {
        assert_eq!(ExerciseId::Letter('A').min_stroke_points(), 1);
        assert_eq!(ExerciseId::Digit('3').min_stroke_points(), 1);
        assert_eq!(ExerciseId::Shape(ShapeKind::Heart).min_stroke_points(), 2);
    }

    #[test]
    fn catalog_has_every_exercise() {
        let all = ExerciseId::all();
        assert_eq!(all.len(), 26 + 10 + 6 + 4);
        assert_eq!(all.iter().filter(|id| id.is_tracing()).count(), 42);
    }

    #[test]
    fn ids_round_trip_through_strings() {
        for id in ExerciseId::all() {
            let parsed: ExerciseId = id.to_string().parse().unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(
            "Shape:STAR".parse::<ExerciseId>().unwrap(),
            ExerciseId::Shape(ShapeKind::Star)
        );
        assert_eq!(
            "dots:Fish".parse::<ExerciseId>().unwrap(),
            ExerciseId::DotPattern(DotPatternKind::Fish)
        );
    }

    #[test]
    fn malformed_ids_are_rejected() {
        for bad in [
            "A",
            "letter:",
            "letter:AB",
            "letter:1",
            "digit:x",
            "shape:blob",
            "dots:cat",
            "glyph:A",
        ] {
            assert!(
                matches!(bad.parse::<ExerciseId>(), Err(ScoringError::UnknownExercise(_))),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn every_tracing_guide_fits_the_canvas() {
        let canvas = BoundingBox {
            min_x: 0.0,
            min_y: 0.0,
            max_x: Dimensions::CANVAS.width,
            max_y: Dimensions::CANVAS.height,
        };
        for id in ExerciseId::all().into_iter().filter(|id| id.is_tracing()) {
            let guide = id.guide().unwrap();
            assert!(guide.len() >= 2, "{id} has {} waypoints", guide.len());
            for p in guide.waypoints() {
                assert!(canvas.contains(*p), "{id} waypoint {p:?} is off canvas");
            }
        }
    }

    #[test]
    fn every_dot_pattern_fits_the_canvas() {
        for kind in DotPatternKind::ALL {
            let dots = kind.dots();
            assert!(dots.len() >= 5);
            for p in &dots {
                assert!(p.x >= 0.0 && p.x <= 430.0 && p.y >= 0.0 && p.y <= 330.0);
            }
        }
    }

    #[test]
    fn circle_closes_on_itself() {
        let guide = ShapeKind::Circle.guide();
        assert_eq!(guide.len(), 46);
        let first = guide.waypoints()[0];
        let last = guide.waypoints()[45];
        assert!(first.distance(last) < 1e-9);
        assert!((first.x - 325.0).abs() < 1e-9);
    }

    #[test]
    fn heart_ends_at_its_tip() {
        let guide = ShapeKind::Heart.guide();
        assert_eq!(guide.len(), 21 + 21 + 1);
        assert_eq!(*guide.waypoints().last().unwrap(), Point::new(210.0, 268.0));
    }

    #[test]
    fn letter_guides_are_indexed_alphabetically() {
        let a = ExerciseId::Letter('A').guide().unwrap();
        assert_eq!(a.waypoints()[0], Point::new(210.0, 40.0));
        let l = ExerciseId::Letter('L').guide().unwrap();
        assert_eq!(*l.waypoints().last().unwrap(), Point::new(280.0, 285.0));
        let seven = ExerciseId::Digit('7').guide().unwrap();
        assert_eq!(*seven.waypoints().last().unwrap(), Point::new(145.0, 285.0));
    }

    #[test]
    fn out_of_table_letters_are_unknown() {
        assert!(matches!(
            ExerciseId::Letter('a').guide(),
            Err(ScoringError::UnknownExercise(_))
        ));
    }

    #[test]
    fn kinds_are_checked() {
        let fish = ExerciseId::DotPattern(DotPatternKind::Fish);
        assert!(matches!(fish.guide(), Err(ScoringError::NotATracingExercise(_))));
        assert_eq!(fish.dots().unwrap().len(), 8);
        assert!(matches!(
            ExerciseId::Letter('Q').dots(),
            Err(ScoringError::NotADotPattern(_))
        ));
    }
}
