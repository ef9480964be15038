use super::*;

fn nest(depth: usize) -> usize {
    ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
}

#[test]
fn shallow_nesting() {
    assert_eq!(nest(16), 16);
}

#[test]
fn deep_nesting_does_not_overflow() {
    // Far deeper than a default 8MB main-thread stack allows unguarded.
    assert_eq!(nest(200_000), 200_000);
}

#[test]
fn passes_through_result() {
    let result: Result<&str, String> = ensure_sufficient_stack(|| Ok("rule"));
    assert_eq!(result, Ok("rule"));
}
