/// Builds a [`Router`](crate::Router) from `pattern => handler` pairs.
///
/// Evaluates to `Result<Router<_>, RouterError>`, stopping at the first
/// pattern that fails to parse. A leading `config;` selects a
/// [`RouterConfig`](crate::RouterConfig).
#[macro_export]
macro_rules! routes {
    {$($pattern:expr => $handler:expr),+ $(,)?} => {
        $crate::routes!{$crate::RouterConfig::default(); $($pattern => $handler),+}
    };

    {$config:expr; $($pattern:expr => $handler:expr),+ $(,)?} => {
        (|| -> ::std::result::Result<$crate::Router<_>, $crate::RouterError> {
            let __router = $crate::Router::with_config($config);
            $(__router.bind($pattern, $handler)?;)+
            ::std::result::Result::Ok(__router)
        })()
    };
}
