// FanC - A small statically typed language compiled to LLVM IR in one pass
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Synthesized attributes passed from child to parent constructs.

use super::labels::PatchList;
use crate::ast::Type;

/// The pending true and false exits of a boolean expression.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BranchLists {
    /// Branches to take when the expression is true.
    pub true_list: PatchList,
    /// Branches to take when the expression is false.
    pub false_list: PatchList,
}

impl BranchLists {
    /// Create branch lists from their two halves.
    pub fn new(true_list: PatchList, false_list: PatchList) -> Self {
        Self {
            true_list,
            false_list,
        }
    }

    /// Swap the true and false exits (logical negation).
    pub fn negate(self) -> Self {
        Self {
            true_list: self.false_list,
            false_list: self.true_list,
        }
    }
}

/// Where an expression's value lives.
#[derive(Debug, PartialEq, Eq)]
pub enum ExprValue {
    /// A value held in an IR operand (temporary or constant).
    Operand(String),
    /// A boolean held as pending control-flow edges.
    Branches(BranchLists),
    /// No value (a void call).
    Unit,
}

/// The synthesized attribute of an expression.
#[derive(Debug, PartialEq, Eq)]
pub struct ExprAttr {
    /// The resolved type.
    pub ty: Type,
    /// The value representation.
    pub value: ExprValue,
}

impl ExprAttr {
    /// A value of type `ty` held in `operand`.
    pub fn operand(ty: Type, operand: impl Into<String>) -> Self {
        Self {
            ty,
            value: ExprValue::Operand(operand.into()),
        }
    }

    /// A boolean in branch form.
    pub fn branches(lists: BranchLists) -> Self {
        Self {
            ty: Type::Bool,
            value: ExprValue::Branches(lists),
        }
    }

    /// The result of a void call.
    pub fn unit() -> Self {
        Self {
            ty: Type::Void,
            value: ExprValue::Unit,
        }
    }

    /// The operand holding this value.
    ///
    /// # Panics
    ///
    /// Panics if the value is not held in an operand.
    pub fn operand_name(&self) -> &str {
        match &self.value {
            ExprValue::Operand(name) => name,
            other => panic!("expression of type {} has no operand: {:?}", self.ty, other),
        }
    }

    /// Take the branch lists of a boolean in branch form.
    ///
    /// # Panics
    ///
    /// Panics if the value is not in branch form.
    pub fn into_branches(self) -> BranchLists {
        match self.value {
            ExprValue::Branches(lists) => lists,
            other => panic!("expression of type {} is not in branch form: {:?}", self.ty, other),
        }
    }
}

/// The synthesized attribute of a statement or statement list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StmtAttr {
    /// Branches to take when the statement completes normally.
    pub next_list: PatchList,
    /// Pending `break` jumps.
    pub break_list: PatchList,
    /// Pending `continue` jumps.
    pub continue_list: PatchList,
}

impl StmtAttr {
    /// A statement with no pending branches.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A statement whose only pending branches are its normal exits.
    pub fn with_next(next_list: PatchList) -> Self {
        Self {
            next_list,
            ..Self::default()
        }
    }
}
