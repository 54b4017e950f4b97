//! The builtin library bound in the root environment.
//!
//! Operators are registered under the operator identifiers of
//! `redex_ir::builtin_names`; the parser desugars infix syntax into calls of
//! these. Object methods are not bound in any environment: they are found
//! through `Object::get` with an identifier key.

mod access;
mod arithmetic;
mod binding;
mod compare;
mod io;
mod methods;

use redex_ir::builtin_names::{
    ADD, ASSIGN, DEFINE, DIV, EQ, FALSE, FIELD_DEFINE, FIELD_GET, FIELD_SET, GE, GT, INDEX_DEFINE,
    INDEX_GET, INDEX_SET, LE, LT, METHOD_CALL, MUL, NE, NEG, NOT, NULL, PRINT, PRINTLN, SUB,
    TRUE,
};
use rustc_hash::FxHashMap;

use crate::native::{BuiltInFunction, NativeFn};
use crate::{Environment, Expression};

/// Name, parameter slots and operation of every fixed-arity builtin.
const OPERATORS: &[(&str, &[&str], NativeFn)] = &[
    (ADD, &["x", "y"], arithmetic::add),
    (SUB, &["x", "y"], arithmetic::sub),
    (MUL, &["x", "y"], arithmetic::mul),
    (DIV, &["x", "y"], arithmetic::div),
    (NEG, &["x"], arithmetic::neg),
    (NOT, &["x"], arithmetic::not),
    (EQ, &["x", "y"], compare::eq),
    (NE, &["x", "y"], compare::ne),
    (LT, &["x", "y"], compare::lt),
    (LE, &["x", "y"], compare::le),
    (GT, &["x", "y"], compare::gt),
    (GE, &["x", "y"], compare::ge),
    (ASSIGN, &["identifier", "expression"], binding::assign),
    (DEFINE, &["identifier", "expression"], binding::define),
    (FIELD_GET, &["object", "identifier"], access::field_get),
    (INDEX_GET, &["object", "index"], access::index_get),
    (FIELD_SET, &["object", "identifier", "value"], access::field_set),
    (FIELD_DEFINE, &["object", "identifier", "value"], access::field_define),
    (INDEX_SET, &["object", "index", "value"], access::index_set),
    (INDEX_DEFINE, &["object", "index", "value"], access::index_define),
];

/// Bind the literals and the builtin library in `env`.
pub fn register(env: &Environment) {
    env.bind(NULL, Expression::Null);
    env.bind(TRUE, Expression::Boolean(true));
    env.bind(FALSE, Expression::Boolean(false));

    for &(name, slots, op) in OPERATORS {
        env.bind(name, Expression::builtin(BuiltInFunction::new(name, slots, op)));
    }

    env.bind(
        METHOD_CALL,
        Expression::builtin(BuiltInFunction::with_rest(
            METHOD_CALL,
            &["object", "identifier"],
            "args",
            access::method_call,
        )),
    );
    env.bind(
        PRINT,
        Expression::builtin(BuiltInFunction::variadic(PRINT, "args", io::print)),
    );
    env.bind(
        PRINTLN,
        Expression::builtin(BuiltInFunction::variadic(PRINTLN, "args", io::println)),
    );
}

thread_local! {
    static METHODS: FxHashMap<&'static str, Expression> = methods::table();
}

/// The builtin object method called `name`.
pub(crate) fn method(name: &str) -> Option<Expression> {
    METHODS.with(|methods| methods.get(name).cloned())
}

#[cfg(test)]
mod tests;
