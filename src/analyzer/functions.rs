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

//! Function analysis for the semantic analyzer.
//!
//! This module provides function-related analysis:
//! - Function declaration and the override discipline
//! - Function body analysis
//! - Call resolution against overloads
//! - The entry point check

use super::context::AnalysisContext;
use super::expressions::ExpressionAnalyzer;
use super::statements::StatementAnalyzer;
use super::symbol::FunctionSig;
use super::type_check::TypeChecker;
use super::Analyzer;
use crate::ast::{mangle, signature, Call, FunctionDef, Type};
use crate::codegen::{ExprAttr, FunctionEmitter};
use crate::error::{CompileError, ErrorCode, Result, Span};
use tracing::debug;

/// Name of the program entry point.
pub const ENTRY_POINT: &str = "main";

/// Extension trait for function analysis.
pub trait FunctionAnalyzer {
    /// Validate a function header and bind it; returns its discriminator.
    fn declare_function(&mut self, func: &FunctionDef) -> Result<usize>;

    /// Declare a function and generate its body.
    fn analyze_function(&mut self, func: &FunctionDef) -> Result<()>;

    /// Analyze a call and emit it.
    fn analyze_call(&mut self, call: &Call) -> Result<ExprAttr>;

    /// Pick the single overload a call resolves to.
    fn resolve_call(&self, name: &str, arg_types: &[Type], span: Span)
        -> Result<(String, FunctionSig)>;

    /// Check that a `void main()` exists.
    fn check_entry_point(&self) -> Result<()>;
}

fn already_declared(name: &str, span: Span) -> CompileError {
    CompileError::new(
        ErrorCode::AlreadyDeclared,
        format!("'{}' is already declared", name),
        span,
    )
}

impl FunctionAnalyzer for Analyzer {
    fn declare_function(&mut self, func: &FunctionDef) -> Result<usize> {
        if func.return_type == Type::String {
            return Err(CompileError::new(
                ErrorCode::TypeMismatch,
                format!("Function '{}' cannot return 'string'", func.name),
                func.span,
            ));
        }
        for param in &func.params {
            self.check_storable(param.param_type, &param.name, param.span)?;
        }

        if self.symbols.lookup_variable(&func.name).is_some() {
            return Err(already_declared(&func.name, func.span));
        }
        if func.is_override && func.name == ENTRY_POINT {
            return Err(CompileError::new(
                ErrorCode::MainRedefinitionForbidden,
                "'main' cannot be overridden",
                func.span,
            ));
        }

        for (index, param) in func.params.iter().enumerate() {
            let clashes = self.symbols.lookup_variable(&param.name).is_some()
                || !self.symbols.lookup_all_by_name(&param.name).is_empty()
                || param.name == func.name
                || func.params[..index].iter().any(|p| p.name == param.name);
            if clashes {
                return Err(already_declared(&param.name, param.span));
            }
        }

        let params = func.param_types();
        let priors = self.symbols.lookup_all_by_name(&func.name);
        let prior_sigs: Vec<&FunctionSig> = priors.iter().filter_map(|s| s.signature()).collect();

        if let [only] = prior_sigs.as_slice() {
            if !only.is_override {
                if func.is_override {
                    return Err(CompileError::new(
                        ErrorCode::OverrideOfNonOverridable,
                        format!("Function '{}' was not declared override", func.name),
                        func.span,
                    )
                    .with_hint(format!(
                        "Declare the first '{}' with 'override' to allow overloads",
                        func.name
                    )));
                }
                return Err(already_declared(&func.name, func.span));
            }
        }
        if !prior_sigs.is_empty() && !func.is_override {
            return Err(CompileError::new(
                ErrorCode::OverrideRequired,
                format!("Redeclaring '{}' requires 'override'", func.name),
                func.span,
            ));
        }
        if prior_sigs
            .iter()
            .any(|sig| sig.params == params && sig.return_type == func.return_type)
        {
            return Err(already_declared(&func.name, func.span).with_hint(format!(
                "An overload with signature {} exists",
                signature(&params, func.return_type)
            )));
        }

        let discriminator = prior_sigs.len();
        debug!(
            function = %func.name,
            signature = %signature(&params, func.return_type),
            discriminator,
            "declared function"
        );
        self.symbols.add_function(
            &func.name,
            FunctionSig {
                params,
                return_type: func.return_type,
                is_override: func.is_override,
                discriminator,
            },
        );
        Ok(discriminator)
    }

    fn analyze_function(&mut self, func: &FunctionDef) -> Result<()> {
        let discriminator = self.declare_function(func)?;
        let params = func.param_types();
        let symbol = mangle(&func.name, discriminator, &params, func.return_type);

        self.codegen
            .open_function(&symbol, func.return_type, &params);
        self.symbols.reset_high_water();
        self.symbols.enter_scope();
        for (index, param) in func.params.iter().enumerate() {
            let offset = -(index as i32) - 1;
            self.symbols
                .add_parameter(&param.name, param.param_type, offset);
        }
        self.context = AnalysisContext {
            loop_depth: 0,
            return_type: Some(func.return_type),
            function_name: Some(func.name.clone()),
        };

        let body = self.analyze_statements(&func.body)?;
        let slots = self.symbols.high_water();
        self.codegen
            .close_function(func.return_type, body.next_list, slots);

        self.leave_scope();
        self.context = AnalysisContext::default();
        Ok(())
    }

    fn analyze_call(&mut self, call: &Call) -> Result<ExprAttr> {
        let mut args = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            args.push(self.analyze_value(arg)?);
        }
        let arg_types: Vec<Type> = args.iter().map(|a| a.ty).collect();
        let (symbol, sig) = self.resolve_call(&call.name, &arg_types, call.span)?;

        let operands: Vec<(String, Type)> = args
            .iter()
            .map(|a| (a.operand_name().to_string(), a.ty))
            .collect();
        let result = self
            .codegen
            .emit_call(&symbol, sig.return_type, &sig.params, &operands);
        Ok(match result {
            Some(value) => ExprAttr::operand(sig.return_type, value),
            None => ExprAttr::unit(),
        })
    }

    fn resolve_call(
        &self,
        name: &str,
        arg_types: &[Type],
        span: Span,
    ) -> Result<(String, FunctionSig)> {
        let known = self.symbols.lookup_all_by_name(name);
        if known.is_empty() {
            return Err(CompileError::new(
                ErrorCode::UndefinedFunction,
                format!("Function '{}' is not defined", name),
                span,
            ));
        }

        let candidates = self.symbols.lookup_callable(name, arg_types);
        let args = signature(arg_types, Type::Void);
        match candidates.as_slice() {
            [] => {
                let available: Vec<String> = known
                    .iter()
                    .filter_map(|s| s.signature())
                    .map(|sig| signature(&sig.params, sig.return_type))
                    .collect();
                Err(CompileError::new(
                    ErrorCode::NoMatchingOverload,
                    format!("No overload of '{}' accepts the given arguments", name),
                    span,
                )
                .with_hint(format!("Available: {}", available.join(", "))))
            }
            [single] => {
                let (Some(symbol), Some(sig)) = (single.ir_name(), single.signature()) else {
                    unreachable!("callable lookup returned a variable");
                };
                debug!(function = name, args = %args, symbol = %symbol, "resolved call");
                Ok((symbol, sig.clone()))
            }
            _ => Err(CompileError::new(
                ErrorCode::AmbiguousCall,
                format!(
                    "Call to '{}' is ambiguous: {} overloads accept the arguments",
                    name,
                    candidates.len()
                ),
                span,
            )),
        }
    }

    fn check_entry_point(&self) -> Result<()> {
        let entry = self
            .symbols
            .lookup_all_by_name(ENTRY_POINT)
            .into_iter()
            .filter_map(|s| s.signature())
            .find(|sig| sig.params.is_empty());
        match entry {
            Some(sig) if sig.return_type == Type::Void => Ok(()),
            _ => Err(CompileError::new(
                ErrorCode::EntryPointMissing,
                "Program has no 'void main()'",
                Span::default(),
            )
            .with_hint("Add a function 'void main() { ... }'")),
        }
    }
}
