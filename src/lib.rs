// Declares a pair type along with an embedded `(code, name, text)` table and a
// total `lookup` function over u16. The table is indexed once on first use; codes
// that are not listed resolve to the fallback pair.
macro_rules! code_table {
    ($(#[$meta:meta])* $vis:vis struct $name:ident { $text:ident }
     fallback = ($fb_name:literal, $fb_text:literal);
     $($code:literal => ($n:literal, $t:literal)),* $(,)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $name {
            pub name: &'static str,
            pub $text: &'static str,
        }

        pub(crate) static TABLE: &[(u16, &str, &str)] = &[$(($code, $n, $t)),*];

        pub const FALLBACK: $name = $name {
            name: $fb_name,
            $text: $fb_text,
        };

        static INDEX: std::sync::LazyLock<std::collections::HashMap<u16, $name>> =
            std::sync::LazyLock::new(|| {
                TABLE
                    .iter()
                    .map(|&(code, name, $text)| (code, $name { name, $text }))
                    .collect()
            });

        pub fn lookup(code: u16) -> $name {
            INDEX.get(&code).copied().unwrap_or(FALLBACK)
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}: {}", self.name, self.$text)
            }
        }
    };
}

pub mod error;
pub mod provider;
pub mod query;
pub mod rcode;
pub mod report;
pub mod resolver;
pub mod response;
pub mod rr_types;
