//! Open-ended enumerations used by the service.
//!
//! The service grows new spellings over time (a new architecture, a new
//! vendor). Each type below knows the spellings published when this client
//! was written and keeps anything else in an `Other` variant instead of
//! rejecting it.

use serde::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A spelling not known to this client.
            Other(String),
        }

        impl $name {
            /// The spelling used on the wire.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $text, )+
                    $name::Other(text) => text,
                }
            }

            /// Whether this value is one of the well-known spellings.
            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl From<&str> for $name {
            fn from(text: &str) -> Self {
                match text {
                    $( $text => $name::$variant, )+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(text: String) -> Self {
                match text.as_str() {
                    $( $text => $name::$variant, )+
                    _ => $name::Other(text),
                }
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

open_enum! {
    /// CPU architecture of a binary.
    pub enum Architecture {
        X64 => "x64",
        X32 => "x32",
        Ppc64 => "ppc64",
        Ppc64le => "ppc64le",
        S390x => "s390x",
        Aarch64 => "aarch64",
        Arm => "arm",
        Sparcv9 => "sparcv9",
        Riscv64 => "riscv64",
    }
}

open_enum! {
    /// Operating system a binary targets.
    pub enum OperatingSystem {
        Linux => "linux",
        Windows => "windows",
        Mac => "mac",
        Solaris => "solaris",
        Aix => "aix",
        AlpineLinux => "alpine-linux",
    }
}

open_enum! {
    /// Kind of image packaged in a binary.
    pub enum ImageKind {
        Jdk => "jdk",
        Jre => "jre",
        TestImage => "testimage",
        DebugImage => "debugimage",
        StaticLibs => "staticlibs",
        Sources => "sources",
        Sbom => "sbom",
    }
}

open_enum! {
    pub enum JvmImplementation {
        Hotspot => "hotspot",
        OpenJ9 => "openj9",
        Dragonwell => "dragonwell",
    }
}

open_enum! {
    /// Heap size variant. `large` builds lift the compressed-oops limit.
    pub enum HeapSize {
        Normal => "normal",
        Large => "large",
    }
}

open_enum! {
    pub enum Vendor {
        AdoptOpenJdk => "adoptopenjdk",
        OpenJdk => "openjdk",
        Eclipse => "eclipse",
        Alibaba => "alibaba",
        Ibm => "ibm",
    }
}

open_enum! {
    /// General availability or early access.
    pub enum ReleaseKind {
        Ga => "ga",
        Ea => "ea",
    }
}

open_enum! {
    /// Result ordering accepted by the listing endpoints.
    pub enum SortOrder {
        Ascending => "ASC",
        Descending => "DESC",
    }
}
