use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

/// Operator precedence tiers, lowest binding first. The discriminants are
/// strictly increasing: each tier binds tighter than the one before it.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default = 0,
    Assignment = 1,
    Logical = 2,
    Equality = 3,
    Relational = 4,
    Additive = 5,
    Multiplicative = 6,
    Unary = 7,
}

impl BindingPower {
    /// The minimum binding power the right operand of an operator at this
    /// tier must reach. Passing `tier + 1` into the recursive call is what
    /// makes every operator in the table left-associative.
    pub fn next(self) -> u8 {
        self as u8 + 1
    }
}

lazy_static! {
    /// Which tokens are binary operators, and how tightly each binds.
    ///
    /// Tokens absent from this table are not operators: reaching one ends
    /// the expression fold, which is how expressions terminate at `;`,
    /// closing brackets and keywords. `Assign` stays out deliberately;
    /// assignment is handled structurally in `parse_expr` and is never
    /// folded as an infix operator.
    pub static ref BINDING_POWER_LOOKUP: HashMap<TokenKind, BindingPower> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Or, BindingPower::Logical);
        map.insert(TokenKind::And, BindingPower::Logical);
        map.insert(TokenKind::Equals, BindingPower::Equality);
        map.insert(TokenKind::NotEquals, BindingPower::Equality);
        map.insert(TokenKind::Less, BindingPower::Relational);
        map.insert(TokenKind::LessEquals, BindingPower::Relational);
        map.insert(TokenKind::Greater, BindingPower::Relational);
        map.insert(TokenKind::GreaterEquals, BindingPower::Relational);
        map.insert(TokenKind::Plus, BindingPower::Additive);
        map.insert(TokenKind::Dash, BindingPower::Additive);
        map.insert(TokenKind::Star, BindingPower::Multiplicative);
        map.insert(TokenKind::Slash, BindingPower::Multiplicative);
        map.insert(TokenKind::Percent, BindingPower::Multiplicative);
        map
    };
}

/// Looks up the binding power of a token, `None` when it is not a binary
/// operator.
pub fn binding_power(kind: TokenKind) -> Option<BindingPower> {
    BINDING_POWER_LOOKUP.get(&kind).copied()
}
