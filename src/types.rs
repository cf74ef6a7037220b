//! Shared enumerations for coral-flow.
//!
//! Every enum here is a closed value set the Coral kit understands on the
//! wire. Each constant maps to exactly one serialized token and back — the
//! mapping is total and injective, and the token strings are bit-exact
//! (`"top-start"`, never `"topStart"`). Components store tokens in their
//! property bags and decode them on read.

use std::str::FromStr;

use thiserror::Error;

// =============================================================================
// Token Error
// =============================================================================

/// A token outside an enumeration's closed set.
///
/// Returned by the `FromStr` impls. `from_token` returns `Option` instead for
/// callers that treat unknown tokens as a plain miss.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {enum_name} token: {token:?}")]
pub struct TokenError {
    /// Name of the enumeration that rejected the token.
    pub enum_name: &'static str,
    /// The offending token.
    pub token: String,
}

/// Generate `token()`, `from_token()`, `FromStr` and an `ALL` table for a
/// closed token set.
///
/// Keeps the constant↔token mapping in one place per enum so the bijection
/// cannot drift.
macro_rules! tokens {
    ($name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        impl $name {
            /// Every constant in the set, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The serialized wire token for this constant.
            pub const fn token(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }

            /// Decode a wire token. `None` if the token is not in the set.
            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl FromStr for $name {
            type Err = TokenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_token(s).ok_or(TokenError {
                    enum_name: stringify!($name),
                    token: s.to_string(),
                })
            }
        }
    };
}

// =============================================================================
// Placement
// =============================================================================

/// Preferred placement of an anchored overlay (tooltip, dropdown, popup)
/// relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Top,
    TopStart,
    TopEnd,
    Bottom,
    BottomStart,
    BottomEnd,
    Left,
    LeftStart,
    LeftEnd,
    Right,
    RightStart,
    RightEnd,
}

tokens!(Placement {
    Top => "top",
    TopStart => "top-start",
    TopEnd => "top-end",
    Bottom => "bottom",
    BottomStart => "bottom-start",
    BottomEnd => "bottom-end",
    Left => "left",
    LeftStart => "left-start",
    LeftEnd => "left-end",
    Right => "right",
    RightStart => "right-start",
    RightEnd => "right-end",
});

// =============================================================================
// Size / Variant
// =============================================================================

/// Component size scale shared by the form controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

tokens!(Size {
    Small => "small",
    Medium => "medium",
    Large => "large",
});

/// Theme variant shared by buttons, badges, alerts and tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    Primary,
    Success,
    #[default]
    Neutral,
    Warning,
    Danger,
}

tokens!(Variant {
    Primary => "primary",
    Success => "success",
    Neutral => "neutral",
    Warning => "warning",
    Danger => "danger",
});

// =============================================================================
// Orientation
// =============================================================================

/// Axis orientation for dividers, split panels and carousels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

tokens!(Orientation {
    Horizontal => "horizontal",
    Vertical => "vertical",
});

// =============================================================================
// Popup Behavior
// =============================================================================

/// Which axes a popup may shrink on to stay inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoSize {
    #[default]
    Horizontal,
    Vertical,
    Both,
}

tokens!(AutoSize {
    Horizontal => "horizontal",
    Vertical => "vertical",
    Both => "both",
});

/// Which anchor dimensions a popup mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sync {
    #[default]
    Width,
    Height,
    Both,
}

tokens!(Sync {
    Width => "width",
    Height => "height",
    Both => "both",
});

/// CSS positioning strategy for popups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Absolute,
    Fixed,
}

tokens!(Strategy {
    Absolute => "absolute",
    Fixed => "fixed",
});

/// Placement of a popup's arrow along the anchor edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrowPlacement {
    Start,
    End,
    Center,
    #[default]
    Anchor,
}

tokens!(ArrowPlacement {
    Start => "start",
    End => "end",
    Center => "center",
    Anchor => "anchor",
});

// =============================================================================
// Tabs
// =============================================================================

/// Edge of a tab group on which the tab strip sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabPlacement {
    #[default]
    Top,
    Bottom,
    Start,
    End,
}

tokens!(TabPlacement {
    Top => "top",
    Bottom => "bottom",
    Start => "start",
    End => "end",
});

// =============================================================================
// Display
// =============================================================================

/// Animation effect of a skeleton placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkeletonEffect {
    Pulse,
    Sheen,
    #[default]
    None,
}

tokens!(SkeletonEffect {
    Pulse => "pulse",
    Sheen => "sheen",
    None => "none",
});

/// Avatar frame shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarShape {
    #[default]
    Circle,
    Square,
    Rounded,
}

tokens!(AvatarShape {
    Circle => "circle",
    Square => "square",
    Rounded => "rounded",
});

// =============================================================================
// Formatting
// =============================================================================

/// Unit basis for byte formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteUnit {
    #[default]
    Byte,
    Bit,
}

tokens!(ByteUnit {
    Byte => "byte",
    Bit => "bit",
});

/// Formatting style for numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberStyle {
    #[default]
    Decimal,
    Currency,
    Percent,
}

tokens!(NumberStyle {
    Decimal => "decimal",
    Currency => "currency",
    Percent => "percent",
});

/// Verbosity of formatted unit output, shared by the formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitDisplay {
    #[default]
    Long,
    Short,
    Narrow,
}

tokens!(UnitDisplay {
    Long => "long",
    Short => "short",
    Narrow => "narrow",
});

// =============================================================================
// Event Payload Phases
// =============================================================================

/// Phase of a rating hover interaction, as carried in the event payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverPhase {
    #[default]
    Start,
    Move,
    End,
}

tokens!(HoverPhase {
    Start => "start",
    Move => "move",
    End => "end",
});

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Encode/decode must be a bijection over the defined set.
    fn assert_bijection<T>(all: &[T])
    where
        T: Copy + PartialEq + std::fmt::Debug,
        T: TokenFns,
    {
        let mut seen = Vec::new();
        for constant in all {
            let token = constant.token_of();
            assert!(
                !seen.contains(&token),
                "duplicate token {token:?} in {all:?}"
            );
            seen.push(token);
            assert_eq!(T::decode(token), Some(*constant));
        }
    }

    /// Test-only adapter so the bijection check can run over every enum.
    trait TokenFns: Sized {
        fn token_of(&self) -> &'static str;
        fn decode(token: &str) -> Option<Self>;
    }

    macro_rules! token_fns {
        ($($ty:ty),+ $(,)?) => {
            $(impl TokenFns for $ty {
                fn token_of(&self) -> &'static str {
                    self.token()
                }
                fn decode(token: &str) -> Option<Self> {
                    Self::from_token(token)
                }
            })+
        };
    }

    token_fns!(
        Placement,
        Size,
        Variant,
        Orientation,
        AutoSize,
        Sync,
        Strategy,
        ArrowPlacement,
        TabPlacement,
        SkeletonEffect,
        AvatarShape,
        ByteUnit,
        NumberStyle,
        UnitDisplay,
        HoverPhase,
    );

    #[test]
    fn test_all_enums_round_trip() {
        assert_bijection(Placement::ALL);
        assert_bijection(Size::ALL);
        assert_bijection(Variant::ALL);
        assert_bijection(Orientation::ALL);
        assert_bijection(AutoSize::ALL);
        assert_bijection(Sync::ALL);
        assert_bijection(Strategy::ALL);
        assert_bijection(ArrowPlacement::ALL);
        assert_bijection(TabPlacement::ALL);
        assert_bijection(SkeletonEffect::ALL);
        assert_bijection(AvatarShape::ALL);
        assert_bijection(ByteUnit::ALL);
        assert_bijection(NumberStyle::ALL);
        assert_bijection(UnitDisplay::ALL);
        assert_bijection(HoverPhase::ALL);
    }

    #[test]
    fn test_placement_tokens_hyphenated() {
        assert_eq!(Placement::TopStart.token(), "top-start");
        assert_eq!(Placement::BottomEnd.token(), "bottom-end");
        assert_eq!(Placement::from_token("left-start"), Some(Placement::LeftStart));
        // Camel case and constant case are not part of the wire vocabulary.
        assert_eq!(Placement::from_token("topStart"), None);
        assert_eq!(Placement::from_token("TOP_START"), None);
    }

    #[test]
    fn test_from_str_reports_unknown_token() {
        let err = "diagonal".parse::<Placement>().unwrap_err();
        assert_eq!(err.enum_name, "Placement");
        assert_eq!(err.token, "diagonal");
        assert!("both".parse::<AutoSize>().is_ok());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Placement::default(), Placement::Top);
        assert_eq!(Size::default(), Size::Medium);
        assert_eq!(Variant::default(), Variant::Neutral);
        assert_eq!(Sync::default(), Sync::Width);
        assert_eq!(ArrowPlacement::default(), ArrowPlacement::Anchor);
    }
}
