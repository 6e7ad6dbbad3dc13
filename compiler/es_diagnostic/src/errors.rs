//! Long-form error documentation for `es explain`.

use crate::ErrorCode;

/// Registry of error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Documentation for an error code, if any exists.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    (
        ErrorCode::E0001,
        "E0001: unterminated string literal

A string opened with `\"` or `'` reached the end of the file before its
closing quote. A backslash takes the next character literally, so `\\\"`
does not close a double-quoted string.

    print(\"hello);     # error
    print(\"hello\");    # ok
",
    ),
    (
        ErrorCode::E0002,
        "E0002: unexpected character

No token starts with this character. Tokens are punctuation (`;` `,` `^`
`(` `)` `(|` `|)` `=` `:=` `->`), strings, numbers, operator runs made of
`+-*/%<=>&|`, and identifiers made of letters, digits and `_`.

    x := 1 @ 2;        # error: `@` is not an operator character
",
    ),
    (
        ErrorCode::E0003,
        "E0003: invalid number literal

A number literal consumes digits, `.`, `e`, `+` and `x`, and the result
must denote a number: a decimal such as `1.5` or `2e10`, or `0x` followed
by digits, read as hex. The letters `a` to `f` are not number characters,
so `0xff` stops at `0x`.

    x := 1.2.3;        # error
    x := 0xff;         # error
    x := 0x10;         # ok, 16
",
    ),
    (
        ErrorCode::E1001,
        "E1001: token cannot continue the expression

The parser finished an expression and the next token cannot extend it.
The most common cause is a closing bracket with no matching opener.

    print(1));         # error at the second `)`
",
    ),
    (
        ErrorCode::E1002,
        "E1002: token cannot start an expression

An expression was expected but the token found can only appear after one,
for example a `,` or `;` with nothing before it.

    f(, 1);            # error
",
    ),
    (
        ErrorCode::E1003,
        "E1003: unclosed delimiter

A `(` must be closed by `)` and a `(|` by `|)`.

    p := (| x := 1 );  # error: expected `|)`
",
    ),
    (
        ErrorCode::E1004,
        "E1004: invalid assignment target

`target = value` rewrites the call `target` to its setter, so the target
must be a method call such as `x`, `p x` or `at(1)`.

    1 = 2;             # error
    p x = 2;           # ok: calls `x=` on p
",
    ),
    (
        ErrorCode::E1005,
        "E1005: invalid definition target

The left side of `:=` or `->` names what is being defined and must look
like a call: `name`, `name(params)`, or `(params)` for a lambda.

    \"x\" := 1;          # error
    add(a, b) -> a + b; # ok
",
    ),
    (
        ErrorCode::E1006,
        "E1006: invalid parameter

Parameters of a method or lambda must be plain identifiers.

    f(1) -> 2;         # error
    f(n) -> n * 2;     # ok
",
    ),
    (
        ErrorCode::E6001,
        "E6001: no function in scope

An unqualified call `name(...)` searches the current object and then each
enclosing object in turn. None of them defines `name`.

Semicolons are mandatory: a missing `;` often turns the next statement into
an argument-less call of an unexpected name.
",
    ),
    (
        ErrorCode::E6002,
        "E6002: no method on receiver

A call with an explicit receiver, `value name(...)`, only searches the
receiver's own methods. Enclosing objects are never consulted.

    o := (| helper -> 1; |);
    o helper;          # ok
    o print(1);        # error: print is not a method of o
",
    ),
    (
        ErrorCode::E6003,
        "E6003: tuple used as a value

`(a, b)` is only meaningful as an argument or parameter list. Evaluating a
tuple with more than one element where a single value is needed fails.

    x := (1, 2);       # error
",
    ),
    (
        ErrorCode::E6004,
        "E6004: value of an unexpected kind

A primitive received a value it cannot work with, such as a string where
a number is required, or an index outside a string.
",
    ),
    (
        ErrorCode::E6005,
        "E6005: wrong number of arguments

Only reported with `--strict-arity`. By default missing parameters read as
null and extra arguments are ignored.
",
    ),
    (
        ErrorCode::E6006,
        "E6006: host primitive failed

A primitive supplied by the host environment reported a failure.
",
    ),
];
