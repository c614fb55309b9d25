use std::path::Path;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::{
    definition::{CompoundDefinition, Definition, DefinitionFactory, FunctionDefinition},
    error::{Error, Result},
    xml::XmlElement,
};

const PUBLIC_FUNCTION_SECTION: &str = "public-func";

/// A class or struct. Its member functions are written inline in its own
/// document, so they are built from the kept `<memberdef>` nodes rather than
/// looked up by id.
#[derive(Debug)]
pub struct ClassDefinition {
    compound: CompoundDefinition,
    public_members: Vec<XmlElement>,
    member_functions: OnceCell<Vec<FunctionDefinition>>,
}

impl ClassDefinition {
    pub(crate) fn new(
        compound: CompoundDefinition,
        elem: &XmlElement,
        document: &Path,
    ) -> Result<Self> {
        let mut public_members = Vec::new();
        for section in elem.children_named("sectiondef") {
            if section.require_attr("kind", document)? == PUBLIC_FUNCTION_SECTION {
                for member in section.children_named("memberdef") {
                    check_member(member, document)?;
                    public_members.push(member.clone());
                }
            }
        }
        Ok(Self {
            compound,
            public_members,
            member_functions: OnceCell::new(),
        })
    }

    pub fn compound(&self) -> &CompoundDefinition {
        &self.compound
    }

    /// Public member functions across every `public-func` section, in
    /// document order. Built on first access and cached; the fields every
    /// member needs were already checked by the load pass.
    pub fn member_functions(&self) -> Result<&[FunctionDefinition]> {
        let functions = self.member_functions.get_or_try_init(|| {
            let factory = DefinitionFactory::new(self.compound.document());
            let mut functions = Vec::with_capacity(self.public_members.len());
            for member in &self.public_members {
                match factory.build(member)? {
                    Definition::Function(function) => functions.push(function),
                    other => {
                        debug!("[class] {} skips member {} of kind {}", self.compound.id(), other.id(), other.kind());
                    },
                }
            }
            Ok::<_, Error>(functions)
        })?;
        Ok(functions)
    }
}

/// A kept member must carry what the factory requires, so a broken member
/// fails the load instead of the first `member_functions` call.
fn check_member(
    member: &XmlElement,
    document: &Path,
) -> Result<()> {
    member.require_attr("id", document)?;
    member.require_attr("kind", document)?;
    member.require_child_text("name", document)?;
    Ok(())
}
