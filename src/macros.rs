#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare one registry entry.
///
/// The six `lines` are listed bottom first; supplying any other count is a
/// compile error.
#[macro_export]
macro_rules! hexagram {
    (
        id: $id:expr,
        key: $key:literal,
        name: $name:literal,
        local: $local:literal,
        upper: $upper:ident,
        lower: $lower:ident,
        judgment: $judgment:literal,
        image: $image:literal,
        explanation: $explanation:literal,
        revelation: $revelation:literal,
        guidance: $guidance:literal,
        lines: [ $( ($text:literal, $meaning:literal) ),* $(,)? ]
        $(,)?
    ) => {
        $crate::registry::Hexagram {
            id: $id,
            key: $key,
            name: $name,
            local_name: $local,
            upper: $crate::registry::Trigram::$upper,
            lower: $crate::registry::Trigram::$lower,
            judgment: $judgment,
            image: $image,
            explanation: $explanation,
            revelation: $revelation,
            guidance: $guidance,
            lines: [ $( $crate::registry::LineText { text: $text, meaning: $meaning } ),* ],
        }
    };
}
