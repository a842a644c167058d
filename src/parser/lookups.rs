use std::collections::HashMap;

use lazy_static::lazy_static;

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Additive,
    Multiplicative,
    Exponential,
}

impl BindingPower {
    /// Numeric precedence, higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            BindingPower::Additive => 2,
            BindingPower::Multiplicative => 3,
            BindingPower::Exponential => 4,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct OperatorInfo {
    pub binding_power: BindingPower,
    pub associativity: Associativity,
}

impl OperatorInfo {
    /// Whether an operator already on the stack with metadata `self` has to be
    /// emitted before `incoming` is pushed.
    pub fn pops_before(&self, incoming: &OperatorInfo) -> bool {
        self.binding_power > incoming.binding_power
            || (self.binding_power == incoming.binding_power
                && incoming.associativity == Associativity::Left)
    }
}

lazy_static! {
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, OperatorInfo> = {
        let mut map = HashMap::new();
        map.insert("^", OperatorInfo { binding_power: BindingPower::Exponential, associativity: Associativity::Right });
        map.insert("*", OperatorInfo { binding_power: BindingPower::Multiplicative, associativity: Associativity::Left });
        map.insert("/", OperatorInfo { binding_power: BindingPower::Multiplicative, associativity: Associativity::Left });
        map.insert("+", OperatorInfo { binding_power: BindingPower::Additive, associativity: Associativity::Left });
        map.insert("-", OperatorInfo { binding_power: BindingPower::Additive, associativity: Associativity::Left });
        map
    };
}

/// Looks up the metadata of an operator symbol.
///
/// # Panics
///
/// Panics if `symbol` is not in [`OPERATOR_LOOKUP`]. The lexer only emits
/// operator tokens for symbols in the table, so this is a programming error.
pub fn operator_info(symbol: &str) -> &'static OperatorInfo {
    OPERATOR_LOOKUP
        .get(symbol)
        .unwrap_or_else(|| panic!("`{}` is not a registered operator", symbol))
}
