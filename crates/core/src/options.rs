//! Fixed value sets offered by the writing form.
//!
//! Each option serializes as its display string ("Kurdish (Sorani)",
//! "Academic Report") because that is what the browser form submits and what
//! the remote `generations` table stores.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

macro_rules! form_option {
    (
        $(#[$meta:meta])*
        $name:ident, $err:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[non_exhaustive]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[doc = $label]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in form order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the display string used on the wire.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match *self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| CoreError::$err(s.to_owned()))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

form_option! {
    /// Target language of the generated text.
    Language, InvalidLanguage {
        English => "English",
        #[default]
        KurdishSorani => "Kurdish (Sorani)",
        KurdishBadini => "Kurdish (Badini)",
        Arabic => "Arabic",
        Spanish => "Spanish",
        French => "French",
    }
}

form_option! {
    /// Kind of document to write.
    ContentType, InvalidContentType {
        #[default]
        Essay => "Essay",
        Story => "Story",
        Script => "Script",
        AcademicReport => "Academic Report",
        Email => "Email",
        SocialMediaPost => "Social Media Post",
        Poetry => "Poetry",
        Copywriting => "Copywriting",
        Summarization => "Summarization",
    }
}

form_option! {
    /// Voice of the generated text.
    Tone, InvalidTone {
        #[default]
        Formal => "Formal",
        Humorous => "Humorous",
        Emotional => "Emotional",
        Motivational => "Motivational",
        Scientific => "Scientific",
        Casual => "Casual",
    }
}

form_option! {
    /// Requested output length.
    Length, InvalidLength {
        Short => "Short",
        #[default]
        Medium => "Medium",
        Long => "Long",
    }
}

impl Language {
    /// Whether text in this language renders right-to-left.
    #[must_use]
    pub const fn is_rtl(&self) -> bool {
        matches!(*self, Self::KurdishSorani | Self::KurdishBadini | Self::Arabic)
    }
}
