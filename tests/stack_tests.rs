use pretty_assertions::assert_eq;
use proptest::prelude::*;
use shopkit::Stack;

#[test]
fn new_stack_is_empty() {
    let stack: Stack<i32> = Stack::new();

    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
}

#[test]
fn push_appends_an_item() {
    let mut stack = Stack::new();
    stack.push(1);

    assert_eq!(stack.len(), 1);
    assert!(!stack.is_empty());
}

#[test]
fn pop_removes_and_returns_the_top() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);

    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.len(), 1);
}

#[test]
fn pop_on_empty_stack_reports_empty() {
    let mut stack: Stack<i32> = Stack::new();

    let err = stack.pop().unwrap_err();
    assert!(err.to_string().to_lowercase().contains("empty"));
    assert_eq!(stack.len(), 0);
}

#[test]
fn peek_returns_the_top_without_removing_it() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);

    assert_eq!(stack.peek(), Ok(&2));
    assert_eq!(stack.len(), 2);
}

#[test]
fn peek_on_empty_stack_reports_empty() {
    let stack: Stack<i32> = Stack::new();

    let err = stack.peek().unwrap_err();
    assert!(err.to_string().to_lowercase().contains("empty"));
}

#[test]
fn clear_removes_all_items() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(1);
    stack.push(1);
    stack.clear();

    assert_eq!(stack.len(), 0);
}

#[test]
fn clear_on_empty_stack_is_a_noop() {
    let mut stack: Stack<i32> = Stack::new();
    stack.clear();

    assert!(stack.is_empty());
}

#[test]
fn from_vec_puts_the_last_element_on_top() {
    let mut stack = Stack::from(vec!["a", "b", "c"]);

    assert_eq!(stack.pop(), Ok("c"));
    assert_eq!(stack.pop(), Ok("b"));
    assert_eq!(stack.pop(), Ok("a"));
}

#[test]
fn with_capacity_starts_empty() {
    let stack: Stack<u8> = Stack::with_capacity(16);
    assert!(stack.is_empty());
}

proptest! {
    /// Pops return elements in exact reverse order of insertion, and
    /// the size accounting matches the number of operations.
    #[test]
    fn pops_reverse_pushes(items in proptest::collection::vec(any::<i32>(), 0..64)) {
        let mut stack = Stack::new();
        for &item in &items {
            stack.push(item);
        }
        prop_assert_eq!(stack.len(), items.len());

        let mut popped = Vec::new();
        while let Ok(item) = stack.pop() {
            popped.push(item);
        }

        let mut expected = items.clone();
        expected.reverse();
        prop_assert_eq!(popped, expected);
        prop_assert!(stack.is_empty());
    }

    /// peek always agrees with the next pop.
    #[test]
    fn peek_agrees_with_pop(items in proptest::collection::vec(any::<u16>(), 1..32)) {
        let mut stack = Stack::from(items);

        while !stack.is_empty() {
            let peeked = *stack.peek().unwrap();
            prop_assert_eq!(stack.pop(), Ok(peeked));
        }
    }
}
