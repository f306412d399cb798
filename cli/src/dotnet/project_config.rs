//! # Project Configuration Service
//!
//! File: cli/src/dotnet/project_config.rs
//!
//! ## Overview
//!
//! Applies small, idempotent edits to an MSBuild project document
//! (`.csproj`). Edits are find-or-create:
//!
//! - **Properties** are upserted into the first `<PropertyGroup>` under
//!   `<Project>`. Writing the value an element already holds is not a
//!   change.
//! - **Friend assemblies** (`<ItemGroup><InternalsVisibleTo/>`) are added
//!   once per assembly name and can be removed again.
//! - **`SuppressMessageAttribute` assembly attributes**
//!   (`<ItemGroup><AssemblyAttribute Include="...">`) are added once per
//!   distinct category/check-id/justification/scope combination.
//!
//! ## Architecture
//!
//! The service owns the parsed `xmltree::Element` root and a `changed`
//! flag. Callers load the file, apply edits, and only write the result
//! back when `has_changed()` is true:
//!
//! ```rust
//! let mut service = ProjectConfigurationService::parse(&xml)?;
//! service.set_target_framework(FrameworkName::Net10)?;
//! service.add_friend_assembly("MyProduct.Tests")?;
//! if service.has_changed() {
//!     let text = service.to_xml_string(&config.formatting)?;
//! }
//! ```
//!
//! Conditional property groups are not distinguished; the first
//! `<PropertyGroup>` is always the target. Layout whitespace from the
//! source is not preserved; output is re-indented per `FormattingConfig`.
//!
use crate::core::config::FormattingConfig;
use crate::core::error::{DnprojError, Result};
use crate::dotnet::names::{AssemblyOutputType, FrameworkName, SuppressMessageScope};
use crate::dotnet::property::PropertySetting;
use tracing::{debug, trace};
use xmltree::{Element, EmitterConfig, XMLNode};

const PROJECT: &str = "Project";
const PROPERTY_GROUP: &str = "PropertyGroup";
const ITEM_GROUP: &str = "ItemGroup";
const INTERNALS_VISIBLE_TO: &str = "InternalsVisibleTo";
const ASSEMBLY_ATTRIBUTE: &str = "AssemblyAttribute";
const INCLUDE: &str = "Include";
const PARAMETER_1: &str = "_Parameter1";
const PARAMETER_2: &str = "_Parameter2";
const JUSTIFICATION: &str = "Justification";
const SCOPE: &str = "Scope";

/// Fully-qualified type name used in `<AssemblyAttribute Include=...>`.
pub const SUPPRESS_MESSAGE_ATTRIBUTE: &str =
    "System.Diagnostics.CodeAnalysis.SuppressMessageAttribute";

/// Arguments of a `SuppressMessageAttribute` applied at assembly level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppressMessage {
    pub category: String,
    pub check_id: String,
    pub justification: Option<String>,
    pub scope: Option<SuppressMessageScope>,
}

impl SuppressMessage {
    pub fn new(category: impl Into<String>, check_id: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            check_id: check_id.into(),
            justification: None,
            scope: None,
        }
    }

    pub fn with_justification(mut self, justification: impl Into<String>) -> Self {
        self.justification = Some(justification.into());
        self
    }

    pub fn with_scope(mut self, scope: SuppressMessageScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Child elements in the order they are written.
    fn parameters(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            (PARAMETER_1, self.category.clone()),
            (PARAMETER_2, self.check_id.clone()),
        ];
        if let Some(justification) = self.justification.as_ref().filter(|j| !j.trim().is_empty()) {
            params.push((JUSTIFICATION, justification.clone()));
        }
        if let Some(scope) = self.scope {
            params.push((SCOPE, scope.to_string()));
        }
        params
    }
}

/// Idempotent editor for one loaded project document.
#[derive(Debug, Clone)]
pub struct ProjectConfigurationService {
    root: Element,
    has_declaration: bool,
    changed: bool,
}

impl ProjectConfigurationService {
    /// Wraps an already-parsed document.
    ///
    /// Fails with `InvalidProject` unless the root is `<Project>` with at
    /// least one `<PropertyGroup>` child.
    pub fn new(root: Element) -> Result<Self> {
        if root.name != PROJECT {
            return Err(DnprojError::InvalidProject("Root element must be <Project>.".into()).into());
        }
        if root.get_child(PROPERTY_GROUP).is_none() {
            return Err(DnprojError::InvalidProject(
                "No <PropertyGroup> element found in project file.".into(),
            )
            .into());
        }
        Ok(Self {
            root,
            has_declaration: false,
            changed: false,
        })
    }

    /// Parses project XML text. The XML declaration is kept on output if the text had one.
    pub fn parse(xml: &str) -> Result<Self> {
        let content = xml.trim_start_matches('\u{feff}');
        let root = Element::parse(content.as_bytes()).map_err(DnprojError::from)?;
        let mut service = Self::new(root)?;
        service.has_declaration = content.trim_start().starts_with("<?xml");
        Ok(service)
    }

    /// True once any edit actually modified the document.
    pub fn has_changed(&self) -> bool {
        self.changed
    }

    #[cfg(test)]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Text of a property in the first `<PropertyGroup>`, if present.
    pub fn property(&self, name: &str) -> Option<String> {
        self.root
            .get_child(PROPERTY_GROUP)
            .and_then(|group| group.get_child(name))
            .map(element_text)
    }

    /// Upserts `<name>value</name>` in the first `<PropertyGroup>`.
    pub fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        let group = self.root.get_mut_child(PROPERTY_GROUP).ok_or_else(|| {
            DnprojError::InvalidProject("No <PropertyGroup> element found in project file.".into())
        })?;

        if let Some(existing) = group.get_mut_child(name) {
            if element_text(existing) == value {
                trace!("Property {} already '{}'", name, value);
            } else {
                debug!("Updating property {} to '{}'", name, value);
                set_text(existing, value);
                self.changed = true;
            }
            return Ok(());
        }

        debug!("Adding property {} = '{}'", name, value);
        group.children.push(XMLNode::Element(text_element(name, value)));
        self.changed = true;
        Ok(())
    }

    pub fn apply(&mut self, setting: &PropertySetting) -> Result<()> {
        self.set_property(setting.element_name(), &setting.value_text())
    }
}

// Typed setters; the CLI itself goes through `apply`.
#[cfg_attr(not(test), allow(dead_code))]
impl ProjectConfigurationService {
    pub fn set_restore_packages_with_lock_file(&mut self, enable: bool) -> Result<()> {
        self.apply(&PropertySetting::RestorePackagesWithLockFile(enable))
    }

    pub fn set_target_framework(&mut self, framework: FrameworkName) -> Result<()> {
        self.apply(&PropertySetting::TargetFramework(framework))
    }

    /// Writes `enable` or `disable`.
    pub fn set_nullable(&mut self, enable: bool) -> Result<()> {
        self.apply(&PropertySetting::Nullable(enable))
    }

    pub fn set_append_target_framework_to_output_path(&mut self, enable: bool) -> Result<()> {
        self.apply(&PropertySetting::AppendTargetFrameworkToOutputPath(enable))
    }

    pub fn set_generate_documentation_file(&mut self, enable: bool) -> Result<()> {
        self.apply(&PropertySetting::GenerateDocumentationFile(enable))
    }

    pub fn set_assembly_name(&mut self, value: &str) -> Result<()> {
        self.apply(&PropertySetting::AssemblyName(value.to_string()))
    }

    pub fn set_intermediate_output_path(&mut self, value: &str) -> Result<()> {
        self.apply(&PropertySetting::IntermediateOutputPath(value.to_string()))
    }

    pub fn set_lang_version(&mut self, value: &str) -> Result<()> {
        self.apply(&PropertySetting::LangVersion(value.to_string()))
    }

    pub fn set_output_path(&mut self, value: &str) -> Result<()> {
        self.apply(&PropertySetting::OutputPath(value.to_string()))
    }

    pub fn set_output_type(&mut self, output_type: AssemblyOutputType) -> Result<()> {
        self.apply(&PropertySetting::OutputType(output_type))
    }

    pub fn set_version(&mut self, value: &str) -> Result<()> {
        self.apply(&PropertySetting::Version(value.to_string()))
    }

    pub fn set_version_prefix(&mut self, value: &str) -> Result<()> {
        self.apply(&PropertySetting::VersionPrefix(value.to_string()))
    }

    pub fn set_version_suffix(&mut self, value: &str) -> Result<()> {
        self.apply(&PropertySetting::VersionSuffix(value.to_string()))
    }
}

impl ProjectConfigurationService {
    /// Grants `assembly_name` access to internals via `<InternalsVisibleTo>name</InternalsVisibleTo>`.
    ///
    /// Existing entries are matched by text or by an `Include` attribute.
    /// The entry goes into the first `<ItemGroup>` that already holds an
    /// `InternalsVisibleTo`, or a new `<ItemGroup>` at the end of the project.
    pub fn add_friend_assembly(&mut self, assembly_name: &str) -> Result<()> {
        let assembly_name = assembly_name.trim();
        if assembly_name.is_empty() {
            return Err(DnprojError::MissingArgument("friend assembly name".into()).into());
        }
        let already_present = item_groups(&self.root)
            .flat_map(child_elements)
            .any(|e| is_friend_entry(e, assembly_name));
        if already_present {
            trace!("InternalsVisibleTo {} already present", assembly_name);
            return Ok(());
        }

        let entry = text_element(INTERNALS_VISIBLE_TO, assembly_name);
        let group = self.item_group_containing(INTERNALS_VISIBLE_TO)?;
        group.children.push(XMLNode::Element(entry));
        debug!("Added InternalsVisibleTo {}", assembly_name);
        self.changed = true;
        Ok(())
    }

    /// Removes each `<ItemGroup>` holding an `InternalsVisibleTo` entry for
    /// `assembly_name`, together with everything else in that group.
    ///
    /// Removing a name that is not present is a no-op.
    pub fn remove_friend_assembly(&mut self, assembly_name: &str) {
        let assembly_name = assembly_name.trim();
        let before = self.root.children.len();
        self.root.children.retain(|node| {
            !node.as_element().is_some_and(|group| {
                group.name == ITEM_GROUP
                    && child_elements(group).any(|e| is_friend_entry(e, assembly_name))
            })
        });
        if self.root.children.len() == before {
            trace!("InternalsVisibleTo {} not present", assembly_name);
            return;
        }
        debug!("Removed ItemGroup with InternalsVisibleTo {}", assembly_name);
        self.changed = true;
    }

    /// Adds an assembly-level `SuppressMessageAttribute` unless an identical one exists.
    ///
    /// Fails with `MissingArgument` when the category or check id is blank.
    pub fn add_suppress_message(&mut self, message: &SuppressMessage) -> Result<()> {
        if message.category.trim().is_empty() {
            return Err(DnprojError::MissingArgument("category".into()).into());
        }
        if message.check_id.trim().is_empty() {
            return Err(DnprojError::MissingArgument("checkId".into()).into());
        }

        let params = message.parameters();
        let already_present = item_groups(&self.root)
            .flat_map(child_elements)
            .any(|e| is_matching_suppression(e, &params));
        if already_present {
            trace!("SuppressMessage {}/{} already present", message.category, message.check_id);
            return Ok(());
        }

        let mut attribute = Element::new(ASSEMBLY_ATTRIBUTE);
        attribute
            .attributes
            .insert(INCLUDE.to_string(), SUPPRESS_MESSAGE_ATTRIBUTE.to_string());
        for (name, value) in &params {
            attribute
                .children
                .push(XMLNode::Element(text_element(name, value)));
        }

        let group = self.item_group_containing(ASSEMBLY_ATTRIBUTE)?;
        group.children.push(XMLNode::Element(attribute));
        debug!("Added SuppressMessage {}/{}", message.category, message.check_id);
        self.changed = true;
        Ok(())
    }

    /// Serializes the document.
    pub fn to_xml_string(&self, formatting: &FormattingConfig) -> Result<String> {
        let config = EmitterConfig::new()
            .perform_indent(formatting.indent)
            .indent_string(formatting.indent_string.clone())
            .write_document_declaration(self.has_declaration);
        let mut buffer = Vec::new();
        self.root
            .write_with_config(&mut buffer, config)
            .map_err(DnprojError::from)?;
        String::from_utf8(buffer)
            .map_err(|e| DnprojError::InvalidProject(format!("Serialized XML is not UTF-8: {}", e)).into())
    }

    /// First `<ItemGroup>` holding a `child_name` element, or a new one appended to the project.
    fn item_group_containing(&mut self, child_name: &str) -> Result<&mut Element> {
        let position = self.root.children.iter().position(|node| {
            node.as_element()
                .is_some_and(|e| e.name == ITEM_GROUP && e.get_child(child_name).is_some())
        });
        let index = match position {
            Some(index) => index,
            None => {
                debug!("Creating new <{}> for {}", ITEM_GROUP, child_name);
                self.root
                    .children
                    .push(XMLNode::Element(Element::new(ITEM_GROUP)));
                self.root.children.len() - 1
            }
        };
        self.root
            .children
            .get_mut(index)
            .and_then(XMLNode::as_mut_element)
            .ok_or_else(|| DnprojError::InvalidProject(format!("Cannot locate <{}>", ITEM_GROUP)).into())
    }
}

fn child_elements(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(XMLNode::as_element)
}

fn item_groups(root: &Element) -> impl Iterator<Item = &Element> {
    child_elements(root).filter(|e| e.name == ITEM_GROUP)
}

fn element_text(element: &Element) -> String {
    element
        .get_text()
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

fn set_text(element: &mut Element, value: &str) {
    element.children.clear();
    if !value.is_empty() {
        element.children.push(XMLNode::Text(value.to_string()));
    }
}

fn text_element(name: &str, value: &str) -> Element {
    let mut element = Element::new(name);
    set_text(&mut element, value);
    element
}

fn is_friend_entry(element: &Element, assembly_name: &str) -> bool {
    element.name == INTERNALS_VISIBLE_TO
        && (element_text(element) == assembly_name
            || element
                .attributes
                .get(INCLUDE)
                .is_some_and(|include| include.trim() == assembly_name))
}

/// Exact match: same type, same parameters, and no extra `Justification`/`Scope`.
fn is_matching_suppression(element: &Element, params: &[(&'static str, String)]) -> bool {
    if element.name != ASSEMBLY_ATTRIBUTE
        || element.attributes.get(INCLUDE).map(String::as_str) != Some(SUPPRESS_MESSAGE_ATTRIBUTE)
    {
        return false;
    }
    [PARAMETER_1, PARAMETER_2, JUSTIFICATION, SCOPE]
        .iter()
        .all(|name| {
            let expected = params.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str());
            let actual = element.get_child(*name).map(element_text);
            actual.as_deref() == expected
        })
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "<Project><PropertyGroup/></Project>";

    const SDK_PROJECT: &str = r#"<Project Sdk="Microsoft.NET.Sdk">

  <PropertyGroup>
    <TargetFramework>net9.0</TargetFramework>
    <Nullable>enable</Nullable>
  </PropertyGroup>

  <ItemGroup>
    <PackageReference Include="xunit" Version="2.9.0" />
  </ItemGroup>

</Project>"#;

    fn compact() -> FormattingConfig {
        FormattingConfig {
            indent: false,
            indent_string: String::new(),
        }
    }

    fn count(root: &Element, group: &str, child: &str) -> usize {
        child_elements(root)
            .filter(|e| e.name == group)
            .flat_map(child_elements)
            .filter(|e| e.name == child)
            .count()
    }

    #[test]
    fn test_rejects_non_project_root() {
        let err = ProjectConfigurationService::parse("<Foo><PropertyGroup/></Foo>").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DnprojError>(),
            Some(DnprojError::InvalidProject(msg)) if msg.contains("<Project>")
        ));
    }

    #[test]
    fn test_rejects_missing_property_group() {
        let err = ProjectConfigurationService::parse("<Project><ItemGroup/></Project>").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DnprojError>(),
            Some(DnprojError::InvalidProject(msg)) if msg.contains("PropertyGroup")
        ));
    }

    #[test]
    fn test_rejects_malformed_xml() {
        let err = ProjectConfigurationService::parse("<Project><PropertyGroup></Project>").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DnprojError>(),
            Some(DnprojError::XmlParse { .. })
        ));
    }

    #[test]
    fn test_set_target_framework_end_to_end() {
        let mut sut = ProjectConfigurationService::parse(MINIMAL).unwrap();
        sut.set_target_framework(FrameworkName::Net10).unwrap();
        assert_eq!(
            sut.to_xml_string(&compact()).unwrap(),
            "<Project><PropertyGroup><TargetFramework>net10.0</TargetFramework></PropertyGroup></Project>"
        );
    }

    #[test]
    fn test_upsert_creates_then_updates_single_element() {
        let mut sut = ProjectConfigurationService::parse(MINIMAL).unwrap();
        sut.set_property("LangVersion", "12").unwrap();
        sut.set_property("LangVersion", "latest").unwrap();

        assert_eq!(count(sut.root(), PROPERTY_GROUP, "LangVersion"), 1);
        assert_eq!(sut.property("LangVersion").as_deref(), Some("latest"));
        assert!(sut.has_changed());
    }

    #[test]
    fn test_upsert_same_value_is_not_a_change() {
        let mut sut = ProjectConfigurationService::parse(SDK_PROJECT).unwrap();
        sut.set_nullable(true).unwrap();
        sut.set_property("TargetFramework", "net9.0").unwrap();
        assert!(!sut.has_changed());

        sut.set_nullable(false).unwrap();
        assert!(sut.has_changed());
        assert_eq!(sut.property("Nullable").as_deref(), Some("disable"));
    }

    #[test]
    fn test_typed_setters_write_expected_text() {
        let mut sut = ProjectConfigurationService::parse(MINIMAL).unwrap();
        sut.set_restore_packages_with_lock_file(true).unwrap();
        sut.set_append_target_framework_to_output_path(false).unwrap();
        sut.set_generate_documentation_file(true).unwrap();
        sut.set_output_type(AssemblyOutputType::WinExe).unwrap();
        sut.set_assembly_name("MyProduct.Core").unwrap();
        sut.set_intermediate_output_path("obj/custom").unwrap();
        sut.set_lang_version("preview").unwrap();
        sut.set_output_path("bin/custom").unwrap();
        sut.set_version("1.2.3").unwrap();
        sut.set_version_prefix("1.2").unwrap();
        sut.set_version_suffix("beta").unwrap();

        let expected = [
            ("RestorePackagesWithLockFile", "true"),
            ("AppendTargetFrameworkToOutputPath", "false"),
            ("GenerateDocumentationFile", "true"),
            ("OutputType", "winexe"),
            ("AssemblyName", "MyProduct.Core"),
            ("IntermediateOutputPath", "obj/custom"),
            ("LangVersion", "preview"),
            ("OutputPath", "bin/custom"),
            ("Version", "1.2.3"),
            ("VersionPrefix", "1.2"),
            ("VersionSuffix", "beta"),
        ];
        for (name, value) in expected {
            assert_eq!(sut.property(name).as_deref(), Some(value), "{}", name);
        }
    }

    #[test]
    fn test_only_first_property_group_is_edited() {
        let xml = r#"<Project>
  <PropertyGroup><OutputType>exe</OutputType></PropertyGroup>
  <PropertyGroup Condition="'$(Configuration)'=='Release'"><Optimize>true</Optimize></PropertyGroup>
</Project>"#;
        let mut sut = ProjectConfigurationService::parse(xml).unwrap();
        sut.set_property("Optimize", "false").unwrap();

        let groups: Vec<&Element> = child_elements(sut.root())
            .filter(|e| e.name == PROPERTY_GROUP)
            .collect();
        assert_eq!(element_text(groups[0].get_child("Optimize").unwrap()), "false");
        assert_eq!(element_text(groups[1].get_child("Optimize").unwrap()), "true");
    }

    #[test]
    fn test_add_friend_assembly_twice_adds_one_entry() {
        let mut sut = ProjectConfigurationService::parse(SDK_PROJECT).unwrap();
        sut.add_friend_assembly("MyProduct.Tests").unwrap();
        sut.add_friend_assembly("MyProduct.Tests").unwrap();

        assert_eq!(count(sut.root(), ITEM_GROUP, INTERNALS_VISIBLE_TO), 1);
        // new ItemGroup, the PackageReference group is left alone
        assert_eq!(item_groups(sut.root()).count(), 2);
        assert!(sut.has_changed());
    }

    #[test]
    fn test_add_friend_assembly_writes_name_as_text() {
        let mut sut = ProjectConfigurationService::parse(MINIMAL).unwrap();
        sut.add_friend_assembly("Tests").unwrap();
        assert_eq!(
            sut.to_xml_string(&compact()).unwrap(),
            "<Project><PropertyGroup /><ItemGroup><InternalsVisibleTo>Tests</InternalsVisibleTo></ItemGroup></Project>"
        );
    }

    #[test]
    fn test_add_friend_assembly_recognizes_include_form() {
        let xml = r#"<Project><PropertyGroup /><ItemGroup><InternalsVisibleTo Include="Tests" /></ItemGroup></Project>"#;
        let mut sut = ProjectConfigurationService::parse(xml).unwrap();
        sut.add_friend_assembly("Tests").unwrap();
        assert!(!sut.has_changed());
    }

    #[test]
    fn test_add_friend_assembly_recognizes_text_form() {
        let xml = r#"<Project>
  <PropertyGroup />
  <ItemGroup>
    <InternalsVisibleTo>Tests</InternalsVisibleTo>
  </ItemGroup>
</Project>"#;
        let mut sut = ProjectConfigurationService::parse(xml).unwrap();
        sut.add_friend_assembly("Tests").unwrap();
        assert!(!sut.has_changed());

        sut.add_friend_assembly("Benchmarks").unwrap();
        assert_eq!(item_groups(sut.root()).count(), 1);
        assert_eq!(count(sut.root(), ITEM_GROUP, INTERNALS_VISIBLE_TO), 2);
    }

    #[test]
    fn test_add_friend_assembly_rejects_blank_name() {
        let mut sut = ProjectConfigurationService::parse(MINIMAL).unwrap();
        assert!(sut.add_friend_assembly("  ").is_err());
        assert!(!sut.has_changed());
    }

    #[test]
    fn test_remove_friend_assembly() {
        let xml = r#"<Project>
  <PropertyGroup />
  <ItemGroup>
    <InternalsVisibleTo>Tests</InternalsVisibleTo>
  </ItemGroup>
</Project>"#;
        let mut sut = ProjectConfigurationService::parse(xml).unwrap();
        sut.remove_friend_assembly("Tests");

        assert!(sut.has_changed());
        assert_eq!(count(sut.root(), ITEM_GROUP, INTERNALS_VISIBLE_TO), 0);
        assert_eq!(item_groups(sut.root()).count(), 0);
    }

    #[test]
    fn test_remove_friend_assembly_drops_whole_item_group() {
        let xml = r#"<Project>
  <PropertyGroup />
  <ItemGroup>
    <InternalsVisibleTo>Tests</InternalsVisibleTo>
    <InternalsVisibleTo>Other</InternalsVisibleTo>
  </ItemGroup>
  <ItemGroup>
    <PackageReference Include="Serilog" Version="4.0.0" />
  </ItemGroup>
</Project>"#;
        let mut sut = ProjectConfigurationService::parse(xml).unwrap();
        sut.remove_friend_assembly("Tests");

        assert!(sut.has_changed());
        assert_eq!(count(sut.root(), ITEM_GROUP, INTERNALS_VISIBLE_TO), 0);
        assert_eq!(item_groups(sut.root()).count(), 1);
        let remaining = item_groups(sut.root()).next().unwrap();
        assert!(remaining.get_child("PackageReference").is_some());
    }

    #[test]
    fn test_remove_friend_assembly_matches_include_form() {
        let xml = r#"<Project><PropertyGroup /><ItemGroup><InternalsVisibleTo Include="Tests" /></ItemGroup></Project>"#;
        let mut sut = ProjectConfigurationService::parse(xml).unwrap();
        sut.remove_friend_assembly("Tests");

        assert!(sut.has_changed());
        assert_eq!(item_groups(sut.root()).count(), 0);
    }

    #[test]
    fn test_remove_missing_friend_assembly_is_noop() {
        let mut sut = ProjectConfigurationService::parse(SDK_PROJECT).unwrap();
        let before = sut.to_xml_string(&compact()).unwrap();
        sut.remove_friend_assembly("Nobody");

        assert!(!sut.has_changed());
        assert_eq!(sut.to_xml_string(&compact()).unwrap(), before);
    }

    #[test]
    fn test_add_suppress_message_twice_adds_one_entry() {
        let mut sut = ProjectConfigurationService::parse(SDK_PROJECT).unwrap();
        let message = SuppressMessage::new("Style", "IDE1006:Naming Styles")
            .with_justification("<Pending>")
            .with_scope(SuppressMessageScope::Module);
        sut.add_suppress_message(&message).unwrap();
        sut.add_suppress_message(&message).unwrap();

        assert_eq!(count(sut.root(), ITEM_GROUP, ASSEMBLY_ATTRIBUTE), 1);
        let attribute = item_groups(sut.root())
            .flat_map(child_elements)
            .find(|e| e.name == ASSEMBLY_ATTRIBUTE)
            .unwrap();
        assert_eq!(
            attribute.attributes.get(INCLUDE).map(String::as_str),
            Some(SUPPRESS_MESSAGE_ATTRIBUTE)
        );
        let names: Vec<&str> = child_elements(attribute).map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec![PARAMETER_1, PARAMETER_2, JUSTIFICATION, SCOPE]);
        assert_eq!(element_text(attribute.get_child(JUSTIFICATION).unwrap()), "<Pending>");
        assert_eq!(element_text(attribute.get_child(SCOPE).unwrap()), "module");
    }

    #[test]
    fn test_add_suppress_message_with_different_check_id_adds_second() {
        let mut sut = ProjectConfigurationService::parse(MINIMAL).unwrap();
        sut.add_suppress_message(&SuppressMessage::new("Style", "IDE1006"))
            .unwrap();
        sut.add_suppress_message(&SuppressMessage::new("Style", "IDE0055"))
            .unwrap();

        assert_eq!(count(sut.root(), ITEM_GROUP, ASSEMBLY_ATTRIBUTE), 2);
        assert_eq!(item_groups(sut.root()).count(), 1);
    }

    #[test]
    fn test_add_suppress_message_recognizes_existing_entry() {
        let xml = r#"<Project>
  <PropertyGroup />
  <ItemGroup>
    <AssemblyAttribute Include="System.Diagnostics.CodeAnalysis.SuppressMessageAttribute">
      <_Parameter1>Maintainability</_Parameter1>
      <_Parameter2>PRm1001:XML Comments Not Complete</_Parameter2>
      <Justification>&lt;Pending&gt;</Justification>
      <Scope>member</Scope>
    </AssemblyAttribute>
  </ItemGroup>
</Project>"#;
        let mut sut = ProjectConfigurationService::parse(xml).unwrap();
        let message = SuppressMessage::new("Maintainability", "PRm1001:XML Comments Not Complete")
            .with_justification("<Pending>")
            .with_scope(SuppressMessageScope::Member);
        sut.add_suppress_message(&message).unwrap();
        assert!(!sut.has_changed());

        // same ids without a scope is a different attribute
        let unscoped = SuppressMessage::new("Maintainability", "PRm1001:XML Comments Not Complete")
            .with_justification("<Pending>");
        sut.add_suppress_message(&unscoped).unwrap();
        assert!(sut.has_changed());
        assert_eq!(count(sut.root(), ITEM_GROUP, ASSEMBLY_ATTRIBUTE), 2);
    }

    #[test]
    fn test_add_suppress_message_requires_category_and_check_id() {
        let mut sut = ProjectConfigurationService::parse(MINIMAL).unwrap();

        let err = sut
            .add_suppress_message(&SuppressMessage::new(" ", "CheckId"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DnprojError>(),
            Some(DnprojError::MissingArgument(name)) if name == "category"
        ));

        let err = sut
            .add_suppress_message(&SuppressMessage::new("Category", ""))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DnprojError>(),
            Some(DnprojError::MissingArgument(name)) if name == "checkId"
        ));
        assert!(!sut.has_changed());
    }

    #[test]
    fn test_declaration_is_preserved() {
        let xml = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<Project><PropertyGroup/></Project>";
        let mut sut = ProjectConfigurationService::parse(xml).unwrap();
        sut.set_version("1.0.0").unwrap();
        let out = sut.to_xml_string(&compact()).unwrap();
        assert!(out.starts_with("<?xml"));
        assert!(out.ends_with("<Version>1.0.0</Version></PropertyGroup></Project>"));

        let out = ProjectConfigurationService::parse(MINIMAL)
            .unwrap()
            .to_xml_string(&compact())
            .unwrap();
        assert!(!out.starts_with("<?xml"));
    }

    #[test]
    fn test_indented_output_reparses() {
        let mut sut = ProjectConfigurationService::parse(SDK_PROJECT).unwrap();
        sut.add_friend_assembly("MyProduct.Tests").unwrap();
        let out = sut.to_xml_string(&FormattingConfig::default()).unwrap();

        assert!(out.contains("\n  <PropertyGroup>"));
        let reparsed = ProjectConfigurationService::parse(&out).unwrap();
        assert_eq!(reparsed.property("TargetFramework").as_deref(), Some("net9.0"));
        assert_eq!(count(reparsed.root(), ITEM_GROUP, INTERNALS_VISIBLE_TO), 1);
    }
}
