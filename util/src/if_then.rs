#[macro_export]
macro_rules! if_then_some {
    ($cond: expr, $val: expr) => {
        if $cond {
            Some($val)
        } else {
            None
        }
    };
    (let $pattern:pat = $expr: expr, $val: expr) => {
        if let $pattern = $expr {
            Some($val)
        } else {
            None
        }
    };
}

#[test]
fn test_if_then_some() {
    assert_eq!(if_then_some!(true, 1), Some(1));
    assert_eq!(if_then_some!(false, 1), None);
    assert_eq!(if_then_some!(let Some(n)=Some(3), n+1), Some(4));
}
