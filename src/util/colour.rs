#[allow(unused_imports)]
use crate::core::prelude::*;

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, Mul},
};

/// An RGBA colour with `f32` channels, nominally in [0, 1].
///
/// Channels are not clamped on construction; arithmetic saturates each
/// channel at 1 but applies no floor, so negative intermediate values pass
/// through. Alpha defaults to 1. Equality uses the crate-wide tolerance.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Colour {
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque colour (alpha 1).
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[must_use]
    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    pub fn as_bytes(&self) -> [u8; 4] {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        [
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
            (self.a * 255.0) as u8,
        ]
    }

    /// Per-channel linear interpolation with unrestricted `t`.
    #[must_use]
    pub fn lerp(a: Colour, b: Colour, t: f32) -> Colour {
        Colour {
            r: calc::lerp(a.r, b.r, t),
            g: calc::lerp(a.g, b.g, t),
            b: calc::lerp(a.b, b.b, t),
            a: calc::lerp(a.a, b.a, t),
        }
    }

    #[must_use]
    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    pub const TRANSPARENT: Colour = Colour::new(0.0, 0.0, 0.0, 0.0);
    pub const ALICE_BLUE: Colour = Colour::rgb(0xf0 as f32 / 255.0, 0xf8 as f32 / 255.0, 0xff as f32 / 255.0);
    pub const ANTIQUE_WHITE: Colour = Colour::rgb(0xfa as f32 / 255.0, 0xeb as f32 / 255.0, 0xd7 as f32 / 255.0);
    pub const AQUA: Colour = Colour::rgb(0x00 as f32 / 255.0, 0xff as f32 / 255.0, 0xff as f32 / 255.0);
    pub const AQUAMARINE: Colour = Colour::rgb(0x7f as f32 / 255.0, 0xff as f32 / 255.0, 0xd4 as f32 / 255.0);
    pub const AZURE: Colour = Colour::rgb(0xf0 as f32 / 255.0, 0xff as f32 / 255.0, 0xff as f32 / 255.0);
    pub const BEIGE: Colour = Colour::rgb(0xf5 as f32 / 255.0, 0xf5 as f32 / 255.0, 0xdc as f32 / 255.0);
    pub const BISQUE: Colour = Colour::rgb(0xff as f32 / 255.0, 0xe4 as f32 / 255.0, 0xc4 as f32 / 255.0);
    pub const BLACK: Colour = Colour::rgb(0.0, 0.0, 0.0);
    pub const BLANCHED_ALMOND: Colour = Colour::rgb(0xff as f32 / 255.0, 0xeb as f32 / 255.0, 0xcd as f32 / 255.0);
    pub const BLUE: Colour = Colour::rgb(0x00 as f32 / 255.0, 0x00 as f32 / 255.0, 0xff as f32 / 255.0);
    pub const BLUE_VIOLET: Colour = Colour::rgb(0x8a as f32 / 255.0, 0x2b as f32 / 255.0, 0xe2 as f32 / 255.0);
    pub const BROWN: Colour = Colour::rgb(0xa5 as f32 / 255.0, 0x2a as f32 / 255.0, 0x2a as f32 / 255.0);
    pub const BURLY_WOOD: Colour = Colour::rgb(0xde as f32 / 255.0, 0xb8 as f32 / 255.0, 0x87 as f32 / 255.0);
    pub const CADET_BLUE: Colour = Colour::rgb(0x5f as f32 / 255.0, 0x9e as f32 / 255.0, 0xa0 as f32 / 255.0);
    pub const CHARTREUSE: Colour = Colour::rgb(0x7f as f32 / 255.0, 0xff as f32 / 255.0, 0x00 as f32 / 255.0);
    pub const CHOCOLATE: Colour = Colour::rgb(0xd2 as f32 / 255.0, 0x69 as f32 / 255.0, 0x1e as f32 / 255.0);
    pub const CORAL: Colour = Colour::rgb(0xff as f32 / 255.0, 0x7f as f32 / 255.0, 0x50 as f32 / 255.0);
    pub const CORNFLOWER_BLUE: Colour = Colour::rgb(0x64 as f32 / 255.0, 0x95 as f32 / 255.0, 0xed as f32 / 255.0);
    pub const CORNSILK: Colour = Colour::rgb(0xff as f32 / 255.0, 0xf8 as f32 / 255.0, 0xdc as f32 / 255.0);
    pub const CRIMSON: Colour = Colour::rgb(0xdc as f32 / 255.0, 0x14 as f32 / 255.0, 0x3c as f32 / 255.0);
    pub const CYAN: Colour = Colour::rgb(0x00 as f32 / 255.0, 0xff as f32 / 255.0, 0xff as f32 / 255.0);
    pub const DARK_BLUE: Colour = Colour::rgb(0x00 as f32 / 255.0, 0x00 as f32 / 255.0, 0x8b as f32 / 255.0);
    pub const DARK_CYAN: Colour = Colour::rgb(0x00 as f32 / 255.0, 0x8b as f32 / 255.0, 0x8b as f32 / 255.0);
    pub const DARK_GOLDENROD: Colour = Colour::rgb(0xb8 as f32 / 255.0, 0x86 as f32 / 255.0, 0x0b as f32 / 255.0);
    pub const DARK_GRAY: Colour = Colour::rgb(0xa9 as f32 / 255.0, 0xa9 as f32 / 255.0, 0xa9 as f32 / 255.0);
    pub const DARK_GREEN: Colour = Colour::rgb(0x00 as f32 / 255.0, 0x64 as f32 / 255.0, 0x00 as f32 / 255.0);
    pub const DARK_KHAKI: Colour = Colour::rgb(0xbd as f32 / 255.0, 0xb7 as f32 / 255.0, 0x6b as f32 / 255.0);
    pub const DARK_MAGENTA: Colour = Colour::rgb(0x8b as f32 / 255.0, 0x00 as f32 / 255.0, 0x8b as f32 / 255.0);
    pub const DARK_OLIVE_GREEN: Colour = Colour::rgb(0x55 as f32 / 255.0, 0x6b as f32 / 255.0, 0x2f as f32 / 255.0);
    pub const DARK_ORANGE: Colour = Colour::rgb(0xff as f32 / 255.0, 0x8c as f32 / 255.0, 0x00 as f32 / 255.0);
    pub const DARK_ORCHID: Colour = Colour::rgb(0x99 as f32 / 255.0, 0x32 as f32 / 255.0, 0xcc as f32 / 255.0);
    pub const DARK_RED: Colour = Colour::rgb(0x8b as f32 / 255.0, 0x00 as f32 / 255.0, 0x00 as f32 / 255.0);
    pub const DARK_SALMON: Colour = Colour::rgb(0xe9 as f32 / 255.0, 0x96 as f32 / 255.0, 0x7a as f32 / 255.0);
    pub const DARK_SEA_GREEN: Colour = Colour::rgb(0x8f as f32 / 255.0, 0xbc as f32 / 255.0, 0x8b as f32 / 255.0);
    pub const DARK_SLATE_BLUE: Colour = Colour::rgb(0x48 as f32 / 255.0, 0x3d as f32 / 255.0, 0x8b as f32 / 255.0);
    pub const DARK_SLATE_GRAY: Colour = Colour::rgb(0x2f as f32 / 255.0, 0x4f as f32 / 255.0, 0x4f as f32 / 255.0);
    pub const DARK_TURQUOISE: Colour = Colour::rgb(0x00 as f32 / 255.0, 0xce as f32 / 255.0, 0xd1 as f32 / 255.0);
    pub const DARK_VIOLET: Colour = Colour::rgb(0x94 as f32 / 255.0, 0x00 as f32 / 255.0, 0xd3 as f32 / 255.0);
    pub const DEEP_PINK: Colour = Colour::rgb(0xff as f32 / 255.0, 0x14 as f32 / 255.0, 0x93 as f32 / 255.0);
    pub const DEEP_SKY_BLUE: Colour = Colour::rgb(0x00 as f32 / 255.0, 0xbf as f32 / 255.0, 0xff as f32 / 255.0);
    pub const DIM_GRAY: Colour = Colour::rgb(0x69 as f32 / 255.0, 0x69 as f32 / 255.0, 0x69 as f32 / 255.0);
    pub const DODGER_BLUE: Colour = Colour::rgb(0x1e as f32 / 255.0, 0x90 as f32 / 255.0, 0xff as f32 / 255.0);
    pub const FIREBRICK: Colour = Colour::rgb(0xb2 as f32 / 255.0, 0x22 as f32 / 255.0, 0x22 as f32 / 255.0);
    pub const FLORAL_WHITE: Colour = Colour::rgb(0xff as f32 / 255.0, 0xfa as f32 / 255.0, 0xf0 as f32 / 255.0);
    pub const FOREST_GREEN: Colour = Colour::rgb(0x22 as f32 / 255.0, 0x8b as f32 / 255.0, 0x22 as f32 / 255.0);
    pub const FUCHSIA: Colour = Colour::rgb(0xff as f32 / 255.0, 0x00 as f32 / 255.0, 0xff as f32 / 255.0);
    pub const GAINSBORO: Colour = Colour::rgb(0xdc as f32 / 255.0, 0xdc as f32 / 255.0, 0xdc as f32 / 255.0);
    pub const GHOST_WHITE: Colour = Colour::rgb(0xf8 as f32 / 255.0, 0xf8 as f32 / 255.0, 0xff as f32 / 255.0);
    pub const GOLD: Colour = Colour::rgb(0xff as f32 / 255.0, 0xd7 as f32 / 255.0, 0x00 as f32 / 255.0);
    pub const GOLDENROD: Colour = Colour::rgb(0xda as f32 / 255.0, 0xa5 as f32 / 255.0, 0x20 as f32 / 255.0);
    pub const GRAY: Colour = Colour::rgb(0x80 as f32 / 255.0, 0x80 as f32 / 255.0, 0x80 as f32 / 255.0);
    pub const GREEN: Colour = Colour::rgb(0.0, 1.0, 0.0);
    pub const GREEN_YELLOW: Colour = Colour::rgb(0xad as f32 / 255.0, 0xff as f32 / 255.0, 0x2f as f32 / 255.0);
    pub const HONEYDEW: Colour = Colour::rgb(0xf0 as f32 / 255.0, 0xff as f32 / 255.0, 0xf0 as f32 / 255.0);
    pub const HOT_PINK: Colour = Colour::rgb(0xff as f32 / 255.0, 0x69 as f32 / 255.0, 0xb4 as f32 / 255.0);
    pub const INDIAN_RED: Colour = Colour::rgb(0xcd as f32 / 255.0, 0x5c as f32 / 255.0, 0x5c as f32 / 255.0);
    pub const INDIGO: Colour = Colour::rgb(0x4b as f32 / 255.0, 0x00 as f32 / 255.0, 0x82 as f32 / 255.0);
    pub const IVORY: Colour = Colour::rgb(0xff as f32 / 255.0, 0xff as f32 / 255.0, 0xf0 as f32 / 255.0);
    pub const KHAKI: Colour = Colour::rgb(0xf0 as f32 / 255.0, 0xe6 as f32 / 255.0, 0x8c as f32 / 255.0);
    pub const LAVENDER: Colour = Colour::rgb(0xe6 as f32 / 255.0, 0xe6 as f32 / 255.0, 0xfa as f32 / 255.0);
    pub const LAVENDER_BLUSH: Colour = Colour::rgb(0xff as f32 / 255.0, 0xf0 as f32 / 255.0, 0xf5 as f32 / 255.0);
    pub const LAWN_GREEN: Colour = Colour::rgb(0x7c as f32 / 255.0, 0xfc as f32 / 255.0, 0x00 as f32 / 255.0);
    pub const LEMON_CHIFFON: Colour = Colour::rgb(0xff as f32 / 255.0, 0xfa as f32 / 255.0, 0xcd as f32 / 255.0);
    pub const LIGHT_BLUE: Colour = Colour::rgb(0xad as f32 / 255.0, 0xd8 as f32 / 255.0, 0xe6 as f32 / 255.0);
    pub const LIGHT_CORAL: Colour = Colour::rgb(0xf0 as f32 / 255.0, 0x80 as f32 / 255.0, 0x80 as f32 / 255.0);
    pub const LIGHT_CYAN: Colour = Colour::rgb(0xe0 as f32 / 255.0, 0xff as f32 / 255.0, 0xff as f32 / 255.0);
    pub const LIGHT_GOLDENROD_YELLOW: Colour = Colour::rgb(0xfa as f32 / 255.0, 0xfa as f32 / 255.0, 0xd2 as f32 / 255.0);
    pub const LIGHT_GRAY: Colour = Colour::rgb(0xd3 as f32 / 255.0, 0xd3 as f32 / 255.0, 0xd3 as f32 / 255.0);
    pub const LIGHT_GREEN: Colour = Colour::rgb(0x90 as f32 / 255.0, 0xee as f32 / 255.0, 0x90 as f32 / 255.0);
    pub const LIGHT_PINK: Colour = Colour::rgb(0xff as f32 / 255.0, 0xb6 as f32 / 255.0, 0xc1 as f32 / 255.0);
    pub const LIGHT_SALMON: Colour = Colour::rgb(0xff as f32 / 255.0, 0xa0 as f32 / 255.0, 0x7a as f32 / 255.0);
    pub const LIGHT_SEA_GREEN: Colour = Colour::rgb(0x20 as f32 / 255.0, 0xb2 as f32 / 255.0, 0xaa as f32 / 255.0);
    pub const LIGHT_SKY_BLUE: Colour = Colour::rgb(0x87 as f32 / 255.0, 0xce as f32 / 255.0, 0xfa as f32 / 255.0);
    pub const LIGHT_SLATE_GRAY: Colour = Colour::rgb(0x77 as f32 / 255.0, 0x88 as f32 / 255.0, 0x99 as f32 / 255.0);
    pub const LIGHT_STEEL_BLUE: Colour = Colour::rgb(0xb0 as f32 / 255.0, 0xc4 as f32 / 255.0, 0xde as f32 / 255.0);
    pub const LIGHT_YELLOW: Colour = Colour::rgb(0xff as f32 / 255.0, 0xff as f32 / 255.0, 0xe0 as f32 / 255.0);
    pub const LIME: Colour = Colour::rgb(0x00 as f32 / 255.0, 0xff as f32 / 255.0, 0x00 as f32 / 255.0);
    pub const LIME_GREEN: Colour = Colour::rgb(0x32 as f32 / 255.0, 0xcd as f32 / 255.0, 0x32 as f32 / 255.0);
    pub const LINEN: Colour = Colour::rgb(0xfa as f32 / 255.0, 0xf0 as f32 / 255.0, 0xe6 as f32 / 255.0);
    pub const MAGENTA: Colour = Colour::rgb(0xff as f32 / 255.0, 0x00 as f32 / 255.0, 0xff as f32 / 255.0);
    pub const MAROON: Colour = Colour::rgb(0x80 as f32 / 255.0, 0x00 as f32 / 255.0, 0x00 as f32 / 255.0);
    pub const MEDIUM_AQUAMARINE: Colour = Colour::rgb(0x66 as f32 / 255.0, 0xcd as f32 / 255.0, 0xaa as f32 / 255.0);
    pub const MEDIUM_BLUE: Colour = Colour::rgb(0x00 as f32 / 255.0, 0x00 as f32 / 255.0, 0xcd as f32 / 255.0);
    pub const MEDIUM_ORCHID: Colour = Colour::rgb(0xba as f32 / 255.0, 0x55 as f32 / 255.0, 0xd3 as f32 / 255.0);
    pub const MEDIUM_PURPLE: Colour = Colour::rgb(0x93 as f32 / 255.0, 0x70 as f32 / 255.0, 0xdb as f32 / 255.0);
    pub const MEDIUM_SEA_GREEN: Colour = Colour::rgb(0x3c as f32 / 255.0, 0xb3 as f32 / 255.0, 0x71 as f32 / 255.0);
    pub const MEDIUM_SLATE_BLUE: Colour = Colour::rgb(0x7b as f32 / 255.0, 0x68 as f32 / 255.0, 0xee as f32 / 255.0);
    pub const MEDIUM_SPRING_GREEN: Colour = Colour::rgb(0x00 as f32 / 255.0, 0xfa as f32 / 255.0, 0x9a as f32 / 255.0);
    pub const MEDIUM_TURQUOISE: Colour = Colour::rgb(0x48 as f32 / 255.0, 0xd1 as f32 / 255.0, 0xcc as f32 / 255.0);
    pub const MEDIUM_VIOLET_RED: Colour = Colour::rgb(0xc7 as f32 / 255.0, 0x15 as f32 / 255.0, 0x85 as f32 / 255.0);
    pub const MIDNIGHT_BLUE: Colour = Colour::rgb(0x19 as f32 / 255.0, 0x19 as f32 / 255.0, 0x70 as f32 / 255.0);
    pub const MINT_CREAM: Colour = Colour::rgb(0xf5 as f32 / 255.0, 0xff as f32 / 255.0, 0xfa as f32 / 255.0);
    pub const MISTY_ROSE: Colour = Colour::rgb(0xff as f32 / 255.0, 0xe4 as f32 / 255.0, 0xe1 as f32 / 255.0);
    pub const MOCCASIN: Colour = Colour::rgb(0xff as f32 / 255.0, 0xe4 as f32 / 255.0, 0xb5 as f32 / 255.0);
    pub const NAVAJO_WHITE: Colour = Colour::rgb(0xff as f32 / 255.0, 0xde as f32 / 255.0, 0xad as f32 / 255.0);
    pub const NAVY: Colour = Colour::rgb(0x00 as f32 / 255.0, 0x00 as f32 / 255.0, 0x80 as f32 / 255.0);
    pub const OLD_LACE: Colour = Colour::rgb(0xfd as f32 / 255.0, 0xf5 as f32 / 255.0, 0xe6 as f32 / 255.0);
    pub const OLIVE: Colour = Colour::rgb(0x80 as f32 / 255.0, 0x80 as f32 / 255.0, 0x00 as f32 / 255.0);
    pub const OLIVE_DRAB: Colour = Colour::rgb(0x6b as f32 / 255.0, 0x8e as f32 / 255.0, 0x23 as f32 / 255.0);
    pub const ORANGE: Colour = Colour::rgb(0xff as f32 / 255.0, 0xa5 as f32 / 255.0, 0x00 as f32 / 255.0);
    pub const ORANGE_RED: Colour = Colour::rgb(0xff as f32 / 255.0, 0x45 as f32 / 255.0, 0x00 as f32 / 255.0);
    pub const ORCHID: Colour = Colour::rgb(0xda as f32 / 255.0, 0x70 as f32 / 255.0, 0xd6 as f32 / 255.0);
    pub const PALE_GOLDENROD: Colour = Colour::rgb(0xee as f32 / 255.0, 0xe8 as f32 / 255.0, 0xaa as f32 / 255.0);
    pub const PALE_GREEN: Colour = Colour::rgb(0x98 as f32 / 255.0, 0xfb as f32 / 255.0, 0x98 as f32 / 255.0);
    pub const PALE_TURQUOISE: Colour = Colour::rgb(0xaf as f32 / 255.0, 0xee as f32 / 255.0, 0xee as f32 / 255.0);
    pub const PALE_VIOLET_RED: Colour = Colour::rgb(0xdb as f32 / 255.0, 0x70 as f32 / 255.0, 0x93 as f32 / 255.0);
    pub const PAPAYA_WHIP: Colour = Colour::rgb(0xff as f32 / 255.0, 0xef as f32 / 255.0, 0xd5 as f32 / 255.0);
    pub const PEACH_PUFF: Colour = Colour::rgb(0xff as f32 / 255.0, 0xda as f32 / 255.0, 0xb9 as f32 / 255.0);
    pub const PERU: Colour = Colour::rgb(0xcd as f32 / 255.0, 0x85 as f32 / 255.0, 0x3f as f32 / 255.0);
    pub const PINK: Colour = Colour::rgb(0xff as f32 / 255.0, 0xc0 as f32 / 255.0, 0xcb as f32 / 255.0);
    pub const PLUM: Colour = Colour::rgb(0xdd as f32 / 255.0, 0xa0 as f32 / 255.0, 0xdd as f32 / 255.0);
    pub const POWDER_BLUE: Colour = Colour::rgb(0xb0 as f32 / 255.0, 0xe0 as f32 / 255.0, 0xe6 as f32 / 255.0);
    pub const PURPLE: Colour = Colour::rgb(0x80 as f32 / 255.0, 0x00 as f32 / 255.0, 0x80 as f32 / 255.0);
    pub const RED: Colour = Colour::rgb(0xff as f32 / 255.0, 0x00 as f32 / 255.0, 0x00 as f32 / 255.0);
    pub const ROSY_BROWN: Colour = Colour::rgb(0xbc as f32 / 255.0, 0x8f as f32 / 255.0, 0x8f as f32 / 255.0);
    pub const ROYAL_BLUE: Colour = Colour::rgb(0x41 as f32 / 255.0, 0x69 as f32 / 255.0, 0xe1 as f32 / 255.0);
    pub const SADDLE_BROWN: Colour = Colour::rgb(0x8b as f32 / 255.0, 0x45 as f32 / 255.0, 0x13 as f32 / 255.0);
    pub const SALMON: Colour = Colour::rgb(0xfa as f32 / 255.0, 0x80 as f32 / 255.0, 0x72 as f32 / 255.0);
    pub const SANDY_BROWN: Colour = Colour::rgb(0xf4 as f32 / 255.0, 0xa4 as f32 / 255.0, 0x60 as f32 / 255.0);
    pub const SEA_GREEN: Colour = Colour::rgb(0x2e as f32 / 255.0, 0x8b as f32 / 255.0, 0x57 as f32 / 255.0);
    pub const SEA_SHELL: Colour = Colour::rgb(0xff as f32 / 255.0, 0xf5 as f32 / 255.0, 0xee as f32 / 255.0);
    pub const SIENNA: Colour = Colour::rgb(0xa0 as f32 / 255.0, 0x52 as f32 / 255.0, 0x2d as f32 / 255.0);
    pub const SILVER: Colour = Colour::rgb(0xc0 as f32 / 255.0, 0xc0 as f32 / 255.0, 0xc0 as f32 / 255.0);
    pub const SKY_BLUE: Colour = Colour::rgb(0x87 as f32 / 255.0, 0xce as f32 / 255.0, 0xeb as f32 / 255.0);
    pub const SLATE_BLUE: Colour = Colour::rgb(0x6a as f32 / 255.0, 0x5a as f32 / 255.0, 0xcd as f32 / 255.0);
    pub const SLATE_GRAY: Colour = Colour::rgb(0x70 as f32 / 255.0, 0x80 as f32 / 255.0, 0x90 as f32 / 255.0);
    pub const SNOW: Colour = Colour::rgb(0xff as f32 / 255.0, 0xfa as f32 / 255.0, 0xfa as f32 / 255.0);
    pub const SPRING_GREEN: Colour = Colour::rgb(0x00 as f32 / 255.0, 0xff as f32 / 255.0, 0x7f as f32 / 255.0);
    pub const STEEL_BLUE: Colour = Colour::rgb(0x46 as f32 / 255.0, 0x82 as f32 / 255.0, 0xb4 as f32 / 255.0);
    pub const TAN: Colour = Colour::rgb(0xd2 as f32 / 255.0, 0xb4 as f32 / 255.0, 0x8c as f32 / 255.0);
    pub const TEAL: Colour = Colour::rgb(0x00 as f32 / 255.0, 0x80 as f32 / 255.0, 0x80 as f32 / 255.0);
    pub const THISTLE: Colour = Colour::rgb(0xd8 as f32 / 255.0, 0xbf as f32 / 255.0, 0xd8 as f32 / 255.0);
    pub const TOMATO: Colour = Colour::rgb(0xff as f32 / 255.0, 0x63 as f32 / 255.0, 0x47 as f32 / 255.0);
    pub const TURQUOISE: Colour = Colour::rgb(0x40 as f32 / 255.0, 0xe0 as f32 / 255.0, 0xd0 as f32 / 255.0);
    pub const VIOLET: Colour = Colour::rgb(0xee as f32 / 255.0, 0x82 as f32 / 255.0, 0xee as f32 / 255.0);
    pub const WHEAT: Colour = Colour::rgb(0xf5 as f32 / 255.0, 0xde as f32 / 255.0, 0xb3 as f32 / 255.0);
    pub const WHITE: Colour = Colour::rgb(1.0, 1.0, 1.0);
    pub const WHITE_SMOKE: Colour = Colour::rgb(0xf5 as f32 / 255.0, 0xf5 as f32 / 255.0, 0xf5 as f32 / 255.0);
    pub const YELLOW: Colour = Colour::rgb(0xff as f32 / 255.0, 0xff as f32 / 255.0, 0x00 as f32 / 255.0);
    pub const YELLOW_GREEN: Colour = Colour::rgb(0x9a as f32 / 255.0, 0xcd as f32 / 255.0, 0x32 as f32 / 255.0);
}

impl Default for Colour {
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

impl PartialEq for Colour {
    fn eq(&self, other: &Self) -> bool {
        calc::approx_eq(self.r, other.r)
            && calc::approx_eq(self.g, other.g)
            && calc::approx_eq(self.b, other.b)
            && calc::approx_eq(self.a, other.a)
    }
}
impl Eq for Colour {}

impl Hash for Colour {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.to_bits().hash(state);
        self.g.to_bits().hash(state);
        self.b.to_bits().hash(state);
        self.a.to_bits().hash(state);
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "r: {}, g: {}, b: {}, a: {}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// Saturating addition: each channel (including alpha) caps at 1.
impl Add for Colour {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            r: f32::min(self.r + rhs.r, 1.0),
            g: f32::min(self.g + rhs.g, 1.0),
            b: f32::min(self.b + rhs.b, 1.0),
            a: f32::min(self.a + rhs.a, 1.0),
        }
    }
}

/// Saturating modulation: each channel (including alpha) caps at 1.
impl Mul for Colour {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            r: f32::min(self.r * rhs.r, 1.0),
            g: f32::min(self.g * rhs.g, 1.0),
            b: f32::min(self.b * rhs.b, 1.0),
            a: f32::min(self.a * rhs.a, 1.0),
        }
    }
}

/// Alpha fade: scales alpha only, leaving RGB untouched. Not a brightness
/// scale.
impl Mul<f32> for Colour {
    type Output = Self;

    fn mul(self, alpha_factor: f32) -> Self::Output {
        Self {
            a: f32::min(self.a * alpha_factor, 1.0),
            ..self
        }
    }
}

impl From<Colour> for Vec3 {
    fn from(value: Colour) -> Self {
        Vec3 {
            x: value.r,
            y: value.g,
            z: value.b,
        }
    }
}

impl From<Colour> for Vec4 {
    fn from(value: Colour) -> Self {
        Vec4 {
            x: value.r,
            y: value.g,
            z: value.b,
            w: value.a,
        }
    }
}

impl From<Colour> for [f32; 4] {
    fn from(value: Colour) -> Self {
        [value.r, value.g, value.b, value.a]
    }
}

/// An HSVA colour. `h` is a fraction of the hue circle: [0, 1) covers 360°.
///
/// A hue outside [0, 1) is legal and is re-wrapped when converting to RGBA,
/// not on construction. When `s` is (approximately) zero the colour is
/// grayscale and `h` carries no meaning.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct ColourHsva {
    pub h: f32,
    pub s: f32,
    pub v: f32,
    pub a: f32,
}

impl ColourHsva {
    pub const HUE_CIRCLE: f32 = 1.0;
    pub const HUE_CIRCLE_OVER_3: f32 = Self::HUE_CIRCLE / 3.0;
    pub const HUE_CIRCLE_OVER_6: f32 = Self::HUE_CIRCLE / 6.0;

    pub const WHITE: ColourHsva = ColourHsva::hsv(0.0, 0.0, 1.0);
    pub const GRAY: ColourHsva = ColourHsva::hsv(0.0, 0.0, 0.5);
    pub const BLACK: ColourHsva = ColourHsva::hsv(0.0, 0.0, 0.0);

    pub const RED: ColourHsva = ColourHsva::hsv(0.0, 1.0, 1.0);
    pub const GREEN: ColourHsva = ColourHsva::hsv(Self::HUE_CIRCLE_OVER_3, 1.0, 1.0);
    pub const BLUE: ColourHsva = ColourHsva::hsv(Self::HUE_CIRCLE_OVER_3 * 2.0, 1.0, 1.0);

    pub const YELLOW: ColourHsva = ColourHsva::hsv(Self::HUE_CIRCLE_OVER_6, 1.0, 1.0);
    pub const LIGHT_BLUE: ColourHsva =
        ColourHsva::hsv(Self::HUE_CIRCLE_OVER_3 + Self::HUE_CIRCLE_OVER_6, 1.0, 1.0);
    pub const MAGENTA: ColourHsva =
        ColourHsva::hsv(Self::HUE_CIRCLE_OVER_3 * 2.0 + Self::HUE_CIRCLE_OVER_6, 1.0, 1.0);

    #[must_use]
    pub const fn new(h: f32, s: f32, v: f32, a: f32) -> Self {
        Self { h, s, v, a }
    }

    /// An opaque HSVA colour (alpha 1).
    #[must_use]
    pub const fn hsv(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v, a: 1.0 }
    }
}

impl Default for ColourHsva {
    fn default() -> Self {
        Self {
            h: 0.0,
            s: 0.0,
            v: 0.0,
            a: 1.0,
        }
    }
}

impl PartialEq for ColourHsva {
    fn eq(&self, other: &Self) -> bool {
        calc::approx_eq(self.h, other.h)
            && calc::approx_eq(self.s, other.s)
            && calc::approx_eq(self.v, other.v)
            && calc::approx_eq(self.a, other.a)
    }
}
impl Eq for ColourHsva {}

impl Hash for ColourHsva {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.h.to_bits().hash(state);
        self.s.to_bits().hash(state);
        self.v.to_bits().hash(state);
        self.a.to_bits().hash(state);
    }
}

impl fmt::Display for ColourHsva {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "h: {}, s: {}, v: {}, a: {}",
            self.h, self.s, self.v, self.a
        )
    }
}

/// Alpha fade; the result alpha is clamped to [0, 1].
impl Mul<f32> for ColourHsva {
    type Output = Self;

    fn mul(self, alpha_factor: f32) -> Self::Output {
        Self {
            a: (self.a * alpha_factor).clamp(0.0, 1.0),
            ..self
        }
    }
}

impl From<Colour> for ColourHsva {
    fn from(colour: Colour) -> Self {
        let min_val = f32::min(f32::min(colour.r, colour.g), colour.b);
        let max_val = f32::max(f32::max(colour.r, colour.g), colour.b);
        let delta = max_val - min_val;

        if calc::is_zero(delta) {
            // Achromatic: hue is meaningless, saturation is zero.
            return ColourHsva {
                h: 0.0,
                s: 0.0,
                v: max_val,
                a: colour.a,
            };
        }

        let delta_inverse = 1.0 / delta;
        let h = if calc::approx_eq(colour.r, max_val) {
            Self::HUE_CIRCLE_OVER_6 * (colour.g - colour.b) * delta_inverse
        } else if calc::approx_eq(colour.g, max_val) {
            Self::HUE_CIRCLE_OVER_3 + Self::HUE_CIRCLE_OVER_6 * (colour.b - colour.r) * delta_inverse
        } else {
            Self::HUE_CIRCLE_OVER_3 * 2.0
                + Self::HUE_CIRCLE_OVER_6 * (colour.r - colour.g) * delta_inverse
        };

        ColourHsva {
            h: calc::modulo(h, Self::HUE_CIRCLE),
            s: delta / max_val,
            v: max_val,
            a: colour.a,
        }
    }
}

impl From<ColourHsva> for Colour {
    fn from(colour: ColourHsva) -> Self {
        if calc::is_zero(colour.s) {
            // Grayscale
            return Colour::new(colour.v, colour.v, colour.v, colour.a);
        }

        // Out-of-range hues wrap here, so the sector index below is always
        // in 0..=5.
        let h = calc::modulo(colour.h, ColourHsva::HUE_CIRCLE);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let sector = (h / ColourHsva::HUE_CIRCLE_OVER_6) as u8;
        let f = calc::modulo(h, ColourHsva::HUE_CIRCLE_OVER_6) * 6.0;
        let p = colour.v * (1.0 - colour.s);
        let q = colour.v * (1.0 - colour.s * f);
        let t = colour.v * (1.0 - colour.s * (1.0 - f));

        match sector {
            0 => Colour::new(colour.v, t, p, colour.a),
            1 => Colour::new(q, colour.v, p, colour.a),
            2 => Colour::new(p, colour.v, t, colour.a),
            3 => Colour::new(p, q, colour.v, colour.a),
            4 => Colour::new(t, p, colour.v, colour.a),
            _ => Colour::new(colour.v, p, q, colour.a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== pure-colour round trips ====================
    //
    // Each pure colour must survive the conversion pair in both directions
    // under tolerance equality.

    #[test]
    fn round_trip_red() {
        assert_eq!(ColourHsva::from(Colour::RED), ColourHsva::RED);
        assert_eq!(Colour::from(ColourHsva::RED), Colour::RED);
    }

    #[test]
    fn round_trip_green() {
        assert_eq!(ColourHsva::from(Colour::GREEN), ColourHsva::GREEN);
        assert_eq!(Colour::from(ColourHsva::GREEN), Colour::GREEN);
    }

    #[test]
    fn round_trip_blue() {
        assert_eq!(ColourHsva::from(Colour::BLUE), ColourHsva::BLUE);
        assert_eq!(Colour::from(ColourHsva::BLUE), Colour::BLUE);
    }

    #[test]
    fn round_trip_yellow() {
        assert_eq!(ColourHsva::from(Colour::YELLOW), ColourHsva::YELLOW);
        assert_eq!(Colour::from(ColourHsva::YELLOW), Colour::YELLOW);
    }

    #[test]
    fn round_trip_magenta() {
        assert_eq!(ColourHsva::from(Colour::MAGENTA), ColourHsva::MAGENTA);
        assert_eq!(Colour::from(ColourHsva::MAGENTA), Colour::MAGENTA);
    }

    #[test]
    fn round_trip_light_blue() {
        // The pure cyan family: ColourHsva::LIGHT_BLUE sits halfway around
        // the hue circle, which is (0, 1, 1) in RGB.
        assert_eq!(ColourHsva::from(Colour::CYAN), ColourHsva::LIGHT_BLUE);
        assert_eq!(Colour::from(ColourHsva::LIGHT_BLUE), Colour::CYAN);
    }

    #[test]
    fn round_trip_black() {
        assert_eq!(ColourHsva::from(Colour::BLACK), ColourHsva::BLACK);
        assert_eq!(Colour::from(ColourHsva::BLACK), Colour::BLACK);
    }

    #[test]
    fn round_trip_white() {
        assert_eq!(ColourHsva::from(Colour::WHITE), ColourHsva::WHITE);
        assert_eq!(Colour::from(ColourHsva::WHITE), Colour::WHITE);
    }

    // ==================== conversion scenarios ====================

    #[test]
    fn red_converts_to_expected_hsva_components() {
        let hsva = ColourHsva::from(Colour::new(1.0, 0.0, 0.0, 1.0));
        assert!(calc::approx_eq(hsva.h, 0.0));
        assert!(calc::approx_eq(hsva.s, 1.0));
        assert!(calc::approx_eq(hsva.v, 1.0));
        assert!(calc::approx_eq(hsva.a, 1.0));
    }

    #[test]
    fn green_converts_to_expected_hsva_components() {
        let hsva = ColourHsva::from(Colour::new(0.0, 1.0, 0.0, 1.0));
        assert!(calc::approx_eq(hsva.h, 1.0 / 3.0));
        assert!(calc::approx_eq(hsva.s, 1.0));
        assert!(calc::approx_eq(hsva.v, 1.0));
        assert!(calc::approx_eq(hsva.a, 1.0));
    }

    #[test]
    fn hue_wraps_on_conversion_to_rgba() {
        let wrapped = Colour::from(ColourHsva::hsv(1.25, 1.0, 1.0));
        let canonical = Colour::from(ColourHsva::hsv(0.25, 1.0, 1.0));
        assert_eq!(wrapped, canonical);
    }

    #[test]
    fn negative_hue_wraps_up() {
        let wrapped = Colour::from(ColourHsva::hsv(-0.25, 1.0, 1.0));
        let canonical = Colour::from(ColourHsva::hsv(0.75, 1.0, 1.0));
        assert_eq!(wrapped, canonical);
    }

    #[test]
    fn zero_saturation_converts_to_grayscale() {
        // Hue is meaningless at zero saturation and must not affect the
        // result.
        let grey = Colour::from(ColourHsva::new(0.37, 0.0, 0.42, 0.9));
        assert_eq!(grey, Colour::new(0.42, 0.42, 0.42, 0.9));
    }

    #[test]
    fn conversion_preserves_alpha() {
        let hsva = ColourHsva::from(Colour::new(0.2, 0.6, 0.4, 0.25));
        assert!(calc::approx_eq(hsva.a, 0.25));
        let rgba = Colour::from(ColourHsva::new(0.5, 0.5, 0.5, 0.75));
        assert!(calc::approx_eq(rgba.a, 0.75));
    }

    #[test]
    fn arbitrary_colour_survives_round_trip() {
        let original = Colour::new(0.3, 0.55, 0.2, 0.8);
        let back = Colour::from(ColourHsva::from(original));
        assert_eq!(back, original);
    }

    // ==================== arithmetic ====================

    #[test]
    fn addition_saturates_at_one() {
        let a = Colour::new(0.8, 0.7, 0.6, 1.0);
        let b = Colour::new(0.5, 0.5, 0.5, 0.5);
        let sum = a + b;
        assert_eq!(sum, Colour::new(1.0, 1.0, 1.0, 1.0));
        assert!(sum.r <= 1.0 && sum.g <= 1.0 && sum.b <= 1.0 && sum.a <= 1.0);
    }

    #[test]
    fn addition_has_no_floor_clamp() {
        let a = Colour::new(-0.5, 0.0, 0.0, 1.0);
        let b = Colour::new(0.2, 0.0, 0.0, 0.0);
        assert!(calc::approx_eq((a + b).r, -0.3));
    }

    #[test]
    fn multiplication_saturates_at_one() {
        let a = Colour::new(0.9, 1.0, 0.5, 1.0);
        let b = Colour::new(0.9, 1.0, 0.5, 1.0);
        let product = a * b;
        assert_eq!(product, Colour::new(0.81, 1.0, 0.25, 1.0));
        assert!(product.r <= 1.0 && product.g <= 1.0 && product.b <= 1.0 && product.a <= 1.0);
    }

    #[test]
    fn scalar_multiplication_scales_alpha_only() {
        let faded = Colour::RED * 0.5;
        assert_eq!(faded, Colour::new(1.0, 0.0, 0.0, 0.5));
        // RGB untouched even for factors above 1; alpha saturates.
        let saturated = Colour::new(0.3, 0.4, 0.5, 0.9) * 2.0;
        assert_eq!(saturated, Colour::new(0.3, 0.4, 0.5, 1.0));
    }

    #[test]
    fn hsva_scalar_multiplication_clamps_alpha() {
        let faded = ColourHsva::RED * 0.5;
        assert!(calc::approx_eq(faded.a, 0.5));
        assert!(calc::approx_eq((ColourHsva::RED * 3.0).a, 1.0));
        assert!(calc::approx_eq((ColourHsva::RED * -1.0).a, 0.0));
    }

    #[test]
    fn lerp_boundaries() {
        let a = Colour::BLACK;
        let b = Colour::WHITE;
        assert_eq!(Colour::lerp(a, b, 0.0), a);
        assert_eq!(Colour::lerp(a, b, 1.0), b);
        assert_eq!(Colour::lerp(a, b, 0.5), Colour::new(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn lerp_extrapolates() {
        let a = Colour::new(0.0, 0.0, 0.0, 1.0);
        let b = Colour::new(0.25, 0.25, 0.25, 1.0);
        assert_eq!(Colour::lerp(a, b, 2.0), Colour::new(0.5, 0.5, 0.5, 1.0));
    }

    // ==================== constants and equality ====================

    #[test]
    fn named_constants_match_byte_values() {
        assert_eq!(Colour::RED, Colour::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(Colour::GREEN, Colour::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(Colour::BLUE, Colour::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(Colour::WHITE, Colour::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(Colour::TRANSPARENT, Colour::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(Colour::CYAN, Colour::AQUA);
        assert_eq!(Colour::MAGENTA, Colour::FUCHSIA);
        assert_eq!(
            Colour::CORNFLOWER_BLUE,
            Colour::from_bytes(0x64, 0x95, 0xed, 0xff)
        );
    }

    #[test]
    fn equality_rgba() {
        assert_eq!(Colour::LIGHT_BLUE, Colour::LIGHT_BLUE);
        assert_ne!(Colour::LIGHT_BLUE, Colour::STEEL_BLUE);
    }

    #[test]
    fn equality_hsva() {
        assert_eq!(ColourHsva::LIGHT_BLUE, ColourHsva::LIGHT_BLUE);
        assert_ne!(ColourHsva::LIGHT_BLUE, ColourHsva::MAGENTA);
    }

    #[test]
    fn default_alpha_is_opaque() {
        assert!(calc::approx_eq(Colour::default().a, 1.0));
        assert!(calc::approx_eq(ColourHsva::default().a, 1.0));
        assert!(calc::approx_eq(Colour::rgb(0.1, 0.2, 0.3).a, 1.0));
    }

    #[test]
    fn byte_conversions() {
        let c = Colour::from_bytes(255, 0, 128, 255);
        assert!(calc::approx_eq(c.r, 1.0));
        assert!(calc::approx_eq(c.g, 0.0));
        assert_eq!(Colour::WHITE.as_bytes(), [255, 255, 255, 255]);
        assert_eq!(Colour::TRANSPARENT.as_bytes(), [0, 0, 0, 0]);
    }

    #[test]
    fn vector_conversions() {
        let c = Colour::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(
            Vec3::from(c),
            Vec3 {
                x: 0.1,
                y: 0.2,
                z: 0.3
            }
        );
        assert_eq!(
            Vec4::from(c),
            Vec4 {
                x: 0.1,
                y: 0.2,
                z: 0.3,
                w: 0.4
            }
        );
        let arr: [f32; 4] = c.into();
        assert_eq!(arr, [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn display_lists_fields() {
        assert_eq!(format!("{}", Colour::RED), "r: 1, g: 0, b: 0, a: 1");
        assert_eq!(
            format!("{}", ColourHsva::hsv(0.5, 1.0, 1.0)),
            "h: 0.5, s: 1, v: 1, a: 1"
        );
    }
}
