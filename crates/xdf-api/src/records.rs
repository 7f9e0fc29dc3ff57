//! Element records as they appear in the exported JSON.
//!
//! Rust field names are English; the serde names follow the German
//! XDatenfelder vocabulary of the export format.

use serde::{Deserialize, Serialize};

use crate::element::{non_empty, Element, ElementKind};

/// Descriptive attributes carried by every element kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, rename = "versionshinweis", skip_serializing_if = "Option::is_none")]
    pub version_note: Option<String>,

    #[serde(default, rename = "bezug", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,

    #[serde(default, rename = "beschreibung", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, rename = "gueltigAb", skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,

    #[serde(default, rename = "gueltigBis", skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,

    #[serde(default, rename = "freigabedatum", skip_serializing_if = "Option::is_none")]
    pub released_on: Option<String>,

    #[serde(
        default,
        rename = "veroeffentlichungsdatum",
        skip_serializing_if = "Option::is_none"
    )]
    pub published_on: Option<String>,
}

/// Input/output captions and help texts shown to form users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default, rename = "bezeichnungEingabe", skip_serializing_if = "Option::is_none")]
    pub input_label: Option<String>,

    #[serde(default, rename = "hilfetextEingabe", skip_serializing_if = "Option::is_none")]
    pub input_help: Option<String>,

    #[serde(default, rename = "bezeichnungAusgabe", skip_serializing_if = "Option::is_none")]
    pub output_label: Option<String>,

    #[serde(default, rename = "hilfetextAusgabe", skip_serializing_if = "Option::is_none")]
    pub output_help: Option<String>,
}

/// Stammdatenschema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub id: String,

    /// Versioned identifier as exported, e.g. `F60000227V1.2`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default, rename = "fachlicherErsteller", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(flatten)]
    pub metadata: Metadata,

    #[serde(flatten)]
    pub labels: Labels,

    /// Ids of rules attached to the schema
    #[serde(default, rename = "regeln")]
    pub rules: Vec<String>,
}

/// Datenfeldgruppe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldGroup {
    pub id: String,

    /// Versioned identifier as exported, e.g. `F60000227V1.2`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default, rename = "fachlicherErsteller", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(flatten)]
    pub metadata: Metadata,

    #[serde(flatten)]
    pub labels: Labels,

    #[serde(default, rename = "regeln")]
    pub rules: Vec<String>,
}

/// Regel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,

    /// Versioned identifier as exported, e.g. `F60000227V1.2`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default, rename = "fachlicherErsteller", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(flatten)]
    pub metadata: Metadata,

    /// Validation script body, kept verbatim (may contain `&#xD;` entities)
    #[serde(default)]
    pub script: String,
}

/// Datenfeld
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,

    /// Versioned identifier as exported, e.g. `F60000227V1.2`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default, rename = "fachlicherErsteller", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(flatten)]
    pub metadata: Metadata,

    #[serde(flatten)]
    pub labels: Labels,

    #[serde(default, rename = "regeln")]
    pub rules: Vec<String>,

    /// Kind-specific attributes, selected by the `feldart` tag
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// The three shapes a field can take ("Feldart").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "feldart", rename_all = "lowercase")]
pub enum FieldKind {
    /// Selection from a code list
    Select {
        #[serde(default, rename = "codelisteReferenz", skip_serializing_if = "Option::is_none")]
        code_list: Option<CodeListReference>,

        #[serde(default, rename = "inhalt", skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    /// Typed free input
    Input {
        #[serde(rename = "datentyp")]
        data_type: String,

        #[serde(default, rename = "praezisierung", skip_serializing_if = "Option::is_none")]
        precision: Option<String>,

        #[serde(default, rename = "inhalt", skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    /// Static text
    Label {
        #[serde(default, rename = "inhalt", skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
}

impl FieldKind {
    /// The `feldart` tag value
    pub fn tag(&self) -> &'static str {
        match self {
            FieldKind::Select { .. } => "select",
            FieldKind::Input { .. } => "input",
            FieldKind::Label { .. } => "label",
        }
    }
}

/// Reference from a select field to its code list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeListReference {
    pub id: String,

    pub genericode: Genericode,
}

/// Genericode identification of a code list version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genericode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub canonical_identification: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_version_uri: Option<String>,
}

macro_rules! impl_element {
    ($ty:ty, $kind:expr) => {
        impl Element for $ty {
            const KIND: ElementKind = $kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn version(&self) -> &str {
                &self.version
            }

            fn identifier(&self) -> &str {
                self.identifier.as_deref().unwrap_or(&self.id)
            }

            fn author(&self) -> Option<&str> {
                non_empty(&self.author)
            }
        }
    };
}

impl_element!(Schema, ElementKind::Schema);
impl_element!(Field, ElementKind::Field);
impl_element!(FieldGroup, ElementKind::Group);
impl_element!(Rule, ElementKind::Rule);
