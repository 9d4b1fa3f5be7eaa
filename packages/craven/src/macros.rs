/// Expands to the path of the enclosing function, e.g. `my_app::db::connect`
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let mut name = name.strip_suffix("::f").unwrap_or(name);
        while let ::std::option::Option::Some(outer) = name.strip_suffix("::{{closure}}") {
            name = outer;
        }
        name
    }};
}

/// Reports an event, filling in the file, line and enclosing function.
///
/// ```no_run
/// let client = craven::ReportingClient::connect("").unwrap();
/// let id = 42;
/// craven::craven!(client, "cannot load record {}", id);
/// ```
#[macro_export]
macro_rules! craven {
    ($client:expr, $($arg:tt)+) => {
        $client.event_fmt(
            ::std::file!(),
            ::std::line!(),
            $crate::function_name!(),
            ::std::format_args!($($arg)+),
        )
    };
}
