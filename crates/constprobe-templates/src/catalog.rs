//! Built-in catalog of probe templates
//!
//! Each template places the attribute in a different syntactic context: a
//! plain function, a function calling a proxy, a conversion operator next to
//! a constructor, and a conversion operator of a derived class.

/// Free function evaluated by `static_assert`
pub const FREE_FUNCTION: &str = r#"
        {fn} bool F() {{ {ret} return true; }}
        static_assert(F());
    "#;

/// Function delegating to a proxy function
pub const PROXY_CALL: &str = r#"
        {fn_proxy} bool F_proxy() {{ {ret_proxy} return true; }}
        {fn} bool F() {{ {ret} return F_proxy(); }}
        static_assert(F());
    "#;

/// Conversion operator of a struct with a user-provided constructor
pub const CONVERSION_OPERATOR: &str = r#"
        struct S {{
            {fn_proxy} S() {{}}
            {fn} operator bool() {{ {ret} return true; }}
        }};
        static_assert(S{{}});
    "#;

/// Conversion operator of a struct deriving from one with a constructor
pub const DERIVED_CONVERSION_OPERATOR: &str = r#"
        struct S_proxy {{
            {fn_proxy} S_proxy() {{}}
        }};
        struct S : S_proxy {{
            {fn} operator bool() {{ {ret} return true; }}
        }};
        static_assert(S{{}});
    "#;

/// Templates in probing order
pub const CATALOG: [&str; 4] = [
    FREE_FUNCTION,
    PROXY_CALL,
    CONVERSION_OPERATOR,
    DERIVED_CONVERSION_OPERATOR,
];
