//! Text and JSON views of a loaded model: every namespace with its direct
//! children, every class with its public member functions.

use std::fmt::Write as _;

use serde::Serialize;

use crate::{
    config::{OutlineFormat, OutlineSettings},
    definition::{Definition, FunctionDefinition, Parameter},
    error::Result,
    ident::{QualifiedName, RefId},
    location::SourceLocation,
    model::SymbolModel,
};

const INDENT: &str = "  ";

pub fn render(
    model: &SymbolModel,
    settings: &OutlineSettings,
) -> Result<String> {
    match settings.format {
        OutlineFormat::Text => render_text(model, settings),
        OutlineFormat::Json => {
            let outline = build(model, settings)?;
            Ok(serde_json::to_string_pretty(&outline)?)
        },
    }
}

pub fn render_text(
    model: &SymbolModel,
    settings: &OutlineSettings,
) -> Result<String> {
    let mut out = String::new();
    for namespace in model.namespaces() {
        push_line(&mut out, 0, namespace, settings);
        let Some(ns) = namespace.as_namespace() else {
            continue;
        };
        for child in ns.child_namespaces(model)? {
            push_line(&mut out, 1, child, settings);
        }
        for class in ns.child_classes(model)? {
            push_line(&mut out, 1, class, settings);
            if !settings.functions {
                continue;
            }
            let Some(class) = class.as_class() else {
                continue;
            };
            for function in class.member_functions()? {
                let _ = write!(out, "{}{}", INDENT.repeat(2), signature(function));
                push_location(&mut out, function.compound().location(), settings);
                out.push('\n');
            }
        }
    }
    Ok(out)
}

fn push_line(
    out: &mut String,
    depth: usize,
    def: &Definition,
    settings: &OutlineSettings,
) {
    let _ = write!(out, "{}{} {}", INDENT.repeat(depth), def.kind(), def.name().scoped());
    push_location(out, def.location(), settings);
    out.push('\n');
}

fn push_location(
    out: &mut String,
    location: &SourceLocation,
    settings: &OutlineSettings,
) {
    if settings.locations && location.is_known() {
        let _ = write!(out, " ({location})");
    }
}

/// `int resize(int width, int _)`; the return type is left out when absent.
pub fn signature(function: &FunctionDefinition) -> String {
    let params = function.params().iter().map(param_text).collect::<Vec<_>>().join(", ");
    match function.return_type() {
        Some(ret) => format!("{ret} {}({params})", function.simple_name()),
        None => format!("{}({params})", function.simple_name()),
    }
}

fn param_text(param: &Parameter) -> String {
    let name = param.name.as_deref().unwrap_or("_");
    match param.type_text() {
        Some(ty) => format!("{ty} {name}"),
        None => name.to_owned(),
    }
}

#[derive(Debug, Serialize)]
pub struct NamespaceOutline<'m> {
    pub id: &'m RefId,
    pub name: &'m QualifiedName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'m SourceLocation>,
    pub namespaces: Vec<&'m QualifiedName>,
    pub classes: Vec<ClassOutline<'m>>,
}

#[derive(Debug, Serialize)]
pub struct ClassOutline<'m> {
    pub id: &'m RefId,
    pub kind: &'m str,
    pub name: &'m QualifiedName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'m SourceLocation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<FunctionOutline<'m>>,
}

#[derive(Debug, Serialize)]
pub struct FunctionOutline<'m> {
    pub id: &'m RefId,
    pub name: &'m str,
    pub return_type: Option<&'m str>,
    pub params: &'m [Parameter],
}

/// Structured form of [`render_text`], ready for serialization.
pub fn build<'m>(
    model: &'m SymbolModel,
    settings: &OutlineSettings,
) -> Result<Vec<NamespaceOutline<'m>>> {
    let location = |loc: &'m SourceLocation| (settings.locations && loc.is_known()).then_some(loc);
    let mut outline = Vec::new();
    for namespace in model.namespaces() {
        let Some(ns) = namespace.as_namespace() else {
            continue;
        };
        let namespaces = ns.child_namespaces(model)?.into_iter().map(Definition::name).collect();
        let mut classes = Vec::new();
        for class in ns.child_classes(model)? {
            let mut functions = Vec::new();
            if settings.functions
                && let Some(def) = class.as_class()
            {
                for function in def.member_functions()? {
                    functions.push(FunctionOutline {
                        id: function.compound().id(),
                        name: function.simple_name(),
                        return_type: function.return_type(),
                        params: function.params(),
                    });
                }
            }
            classes.push(ClassOutline {
                id: class.id(),
                kind: class.kind().as_str(),
                name: class.name(),
                location: location(class.location()),
                functions,
            });
        }
        outline.push(NamespaceOutline {
            id: namespace.id(),
            name: namespace.name(),
            location: location(namespace.location()),
            namespaces,
            classes,
        });
    }
    Ok(outline)
}

#[cfg(test)]
#[path = "../tests/src/outline_tests.rs"]
mod tests;
