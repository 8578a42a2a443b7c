#[cfg(debug_assertions)]
#[macro_export]
macro_rules! if_dbg_else {({$($tt_dbg: tt)*}{$($tt_else: tt)*}) => {
    $($tt_dbg)*
}}
#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! if_dbg_else {({$($tt_dbg: tt)*}{$($tt_else: tt)*}) => {
    $($tt_else)*
}}

#[test]
fn test_if_dbg_else() {
    let n = if_dbg_else!({0}{1});
    if cfg!(debug_assertions) {
        assert_eq!(n, 0);
    } else {
        assert_eq!(n, 1);
    }
}
