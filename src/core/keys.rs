// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/keys.rs
//!
//! Output symbol tables
//!
//! Every keyboard key and mouse button a binding may resolve to is declared
//! exactly once here, together with its canonical name and Linux evdev code.
//! Names are the evdev names without their `KEY_` / `BTN_` prefix, which is
//! what a cleaned VDF binding token looks like.
//!
//! Lookup is an explicit match generated from the table, so an unknown name
//! is rejected at the lookup site instead of surfacing later.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a symbol enum plus its name/code tables from a single list.
macro_rules! symbol_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident = ($text:literal, $code:literal),)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
        $vis enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every symbol, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Looks a symbol up by its exact canonical name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Canonical name (evdev name without prefix).
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Linux evdev event code.
            pub fn code(self) -> u16 {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }
    };
}

symbol_table! {
    /// Keyboard keys a `key_press` binding can produce
    pub enum Key {
        Esc = ("ESC", 1),
        Num1 = ("1", 2),
        Num2 = ("2", 3),
        Num3 = ("3", 4),
        Num4 = ("4", 5),
        Num5 = ("5", 6),
        Num6 = ("6", 7),
        Num7 = ("7", 8),
        Num8 = ("8", 9),
        Num9 = ("9", 10),
        Num0 = ("0", 11),
        Minus = ("MINUS", 12),
        Equal = ("EQUAL", 13),
        Backspace = ("BACKSPACE", 14),
        Tab = ("TAB", 15),
        Q = ("Q", 16),
        W = ("W", 17),
        E = ("E", 18),
        R = ("R", 19),
        T = ("T", 20),
        Y = ("Y", 21),
        U = ("U", 22),
        I = ("I", 23),
        O = ("O", 24),
        P = ("P", 25),
        LeftBrace = ("LEFTBRACE", 26),
        RightBrace = ("RIGHTBRACE", 27),
        Enter = ("ENTER", 28),
        LeftCtrl = ("LEFTCTRL", 29),
        A = ("A", 30),
        S = ("S", 31),
        D = ("D", 32),
        F = ("F", 33),
        G = ("G", 34),
        H = ("H", 35),
        J = ("J", 36),
        K = ("K", 37),
        L = ("L", 38),
        Semicolon = ("SEMICOLON", 39),
        Apostrophe = ("APOSTROPHE", 40),
        Grave = ("GRAVE", 41),
        LeftShift = ("LEFTSHIFT", 42),
        Backslash = ("BACKSLASH", 43),
        Z = ("Z", 44),
        X = ("X", 45),
        C = ("C", 46),
        V = ("V", 47),
        B = ("B", 48),
        N = ("N", 49),
        M = ("M", 50),
        Comma = ("COMMA", 51),
        Dot = ("DOT", 52),
        Slash = ("SLASH", 53),
        RightShift = ("RIGHTSHIFT", 54),
        KpAsterisk = ("KPASTERISK", 55),
        LeftAlt = ("LEFTALT", 56),
        Space = ("SPACE", 57),
        CapsLock = ("CAPSLOCK", 58),
        F1 = ("F1", 59),
        F2 = ("F2", 60),
        F3 = ("F3", 61),
        F4 = ("F4", 62),
        F5 = ("F5", 63),
        F6 = ("F6", 64),
        F7 = ("F7", 65),
        F8 = ("F8", 66),
        F9 = ("F9", 67),
        F10 = ("F10", 68),
        NumLock = ("NUMLOCK", 69),
        ScrollLock = ("SCROLLLOCK", 70),
        Kp7 = ("KP7", 71),
        Kp8 = ("KP8", 72),
        Kp9 = ("KP9", 73),
        KpMinus = ("KPMINUS", 74),
        Kp4 = ("KP4", 75),
        Kp5 = ("KP5", 76),
        Kp6 = ("KP6", 77),
        KpPlus = ("KPPLUS", 78),
        Kp1 = ("KP1", 79),
        Kp2 = ("KP2", 80),
        Kp3 = ("KP3", 81),
        Kp0 = ("KP0", 82),
        KpDot = ("KPDOT", 83),
        F11 = ("F11", 87),
        F12 = ("F12", 88),
        KpEnter = ("KPENTER", 96),
        RightCtrl = ("RIGHTCTRL", 97),
        KpSlash = ("KPSLASH", 98),
        SysRq = ("SYSRQ", 99),
        RightAlt = ("RIGHTALT", 100),
        Home = ("HOME", 102),
        Up = ("UP", 103),
        PageUp = ("PAGEUP", 104),
        Left = ("LEFT", 105),
        Right = ("RIGHT", 106),
        End = ("END", 107),
        Down = ("DOWN", 108),
        PageDown = ("PAGEDOWN", 109),
        Insert = ("INSERT", 110),
        Delete = ("DELETE", 111),
        Mute = ("MUTE", 113),
        VolumeDown = ("VOLUMEDOWN", 114),
        VolumeUp = ("VOLUMEUP", 115),
        Pause = ("PAUSE", 119),
        LeftMeta = ("LEFTMETA", 125),
        RightMeta = ("RIGHTMETA", 126),
        Compose = ("COMPOSE", 127),
        HomePage = ("HOMEPAGE", 172),
        F13 = ("F13", 183),
        F14 = ("F14", 184),
        F15 = ("F15", 185),
        F16 = ("F16", 186),
        F17 = ("F17", 187),
        F18 = ("F18", 188),
        F19 = ("F19", 189),
        F20 = ("F20", 190),
        F21 = ("F21", 191),
        F22 = ("F22", 192),
        F23 = ("F23", 193),
        F24 = ("F24", 194),
    }
}

symbol_table! {
    /// Mouse buttons a `mouse_button` binding can produce
    pub enum MouseButton {
        Left = ("LEFT", 0x110),
        Right = ("RIGHT", 0x111),
        Middle = ("MIDDLE", 0x112),
        Side = ("SIDE", 0x113),
        Extra = ("EXTRA", 0x114),
        Forward = ("FORWARD", 0x115),
        Back = ("BACK", 0x116),
        Task = ("TASK", 0x117),
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KEY_{}", self.name())
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BTN_{}", self.name())
    }
}
