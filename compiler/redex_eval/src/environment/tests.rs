use super::*;
use crate::errors::EvalError;
use crate::silent_handler;
use pretty_assertions::assert_eq;
use redex_ir::Position;

fn root() -> Environment {
    Environment::new(silent_handler(), 100)
}

fn id(name: &str) -> Identifier {
    Identifier::new(name, Position::builtin())
}

#[test]
fn define_then_get() {
    let env = root();
    assert_eq!(env.define(&id("x"), Expression::number(5)), Ok(()));
    assert_eq!(env.get(&id("x")), Ok(Expression::number(5)));
}

#[test]
fn second_define_in_same_scope_fails() {
    let env = root();
    assert_eq!(env.define(&id("x"), Expression::number(1)), Ok(()));
    assert_eq!(
        env.define(&id("x"), Expression::number(2)),
        Err(EvalError::AlreadyDefined(id("x")))
    );
    assert_eq!(env.get(&id("x")), Ok(Expression::number(1)));
}

#[test]
fn child_may_shadow_parent() {
    let parent = root();
    assert_eq!(parent.define(&id("x"), Expression::number(1)), Ok(()));
    let child = parent.make_child();
    assert_eq!(child.define(&id("x"), Expression::number(2)), Ok(()));
    assert_eq!(child.get(&id("x")), Ok(Expression::number(2)));
    assert_eq!(parent.get(&id("x")), Ok(Expression::number(1)));
}

#[test]
fn get_walks_parents() {
    let parent = root();
    assert_eq!(parent.define(&id("x"), Expression::number(1)), Ok(()));
    let grandchild = parent.make_child().make_child();
    assert_eq!(grandchild.get(&id("x")), Ok(Expression::number(1)));
}

#[test]
fn get_undefined_fails() {
    assert_eq!(root().get(&id("nope")), Err(EvalError::NotDefined(id("nope"))));
}

#[test]
fn put_undefined_fails_and_creates_nothing() {
    let env = root();
    assert_eq!(
        env.put(&id("x"), Expression::number(1)),
        Err(EvalError::NotDefined(id("x")))
    );
    assert!(!env.has_local("x"));
}

#[test]
fn put_mutates_the_ancestor_binding() {
    let ancestor = root();
    assert_eq!(ancestor.define(&id("x"), Expression::number(1)), Ok(()));
    let writer = ancestor.make_child();
    let reader = ancestor.make_child();

    assert_eq!(writer.put(&id("x"), Expression::number(9)), Ok(()));

    assert!(!writer.has_local("x"));
    assert_eq!(reader.get(&id("x")), Ok(Expression::number(9)));
}

#[test]
fn put_targets_the_nearest_binding() {
    let outer = root();
    assert_eq!(outer.define(&id("x"), Expression::number(1)), Ok(()));
    let inner = outer.make_child();
    assert_eq!(inner.define(&id("x"), Expression::number(2)), Ok(()));

    assert_eq!(inner.make_child().put(&id("x"), Expression::number(3)), Ok(()));

    assert_eq!(inner.get(&id("x")), Ok(Expression::number(3)));
    assert_eq!(outer.get(&id("x")), Ok(Expression::number(1)));
}

#[test]
fn long_chains_drop_without_recursion() {
    let mut env = root();
    for _ in 0..200_000 {
        env = env.make_child();
    }
    drop(env);
}

#[test]
fn depth_guard_counts_and_releases() {
    let env = Environment::new(silent_handler(), 2);
    let first = env.enter();
    assert!(first.is_ok());
    let second = env.enter();
    assert!(second.is_ok());
    assert_eq!(env.depth(), 2);
    assert_eq!(
        env.enter().err(),
        Some(EvalError::StackOverflow { depth: 2 })
    );
    drop(second);
    drop(first);
    assert_eq!(env.depth(), 0);
}

#[test]
fn children_share_the_print_handler() {
    let output = crate::buffer_handler();
    let env = Environment::new(output.clone(), 10).make_child();
    env.print_handler().print("hi");
    assert_eq!(output.get_output(), "hi");
}
