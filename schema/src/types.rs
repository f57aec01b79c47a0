use serde::{Deserialize, Serialize};

use crate::sig::map_signature;

/// Documentation body carried by the `tp:docstring` vendor extension
/// (namespace `http://telepathy.freedesktop.org/wiki/DbusSpec#extensions-v0`).
/// Interfaces without the extension get the empty default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocString {
    #[serde(rename(deserialize = "$text"), default)]
    pub body: String,
}

/// A method or signal argument. `direction` is `"in"` or `"out"` by D-Bus
/// convention; this layer stores whatever the document says and leaves
/// odd values to degrade in the derived views instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Arg {
    #[serde(rename(deserialize = "@name"), default)]
    pub name: String,
    #[serde(rename(serialize = "type", deserialize = "@type"), default)]
    pub ty: String,
    #[serde(rename(deserialize = "@direction"), default)]
    pub direction: String,
}

impl Arg {
    /// The Rust type name generated bindings use for this argument's
    /// signature. Pure lookup, never fails; see [`map_signature`].
    pub fn rust_type(&self) -> &'static str {
        map_signature(&self.ty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Method {
    #[serde(rename(deserialize = "@name"), default)]
    pub name: String,
    #[serde(rename(serialize = "docstring", deserialize = "docstring"), default)]
    pub docstring: DocString,
    #[serde(rename(deserialize = "arg"), default)]
    pub args: Vec<Arg>,
}

impl Method {
    /// Input arguments (`direction="in"`), in declaration order.
    pub fn parameters(&self) -> impl Iterator<Item = &Arg> {
        self.args.iter().filter(|a| a.direction == "in")
    }

    /// Output arguments (`direction="out"`), in declaration order.
    pub fn returns(&self) -> impl Iterator<Item = &Arg> {
        self.args.iter().filter(|a| a.direction == "out")
    }
}

/// Signal arguments are all output-direction by D-Bus convention, so
/// signals carry no in/out views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    #[serde(rename(deserialize = "@name"), default)]
    pub name: String,
    #[serde(rename(serialize = "docstring", deserialize = "docstring"), default)]
    pub docstring: DocString,
    #[serde(rename(deserialize = "arg"), default)]
    pub args: Vec<Arg>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename(deserialize = "@name"), default)]
    pub name: String,
    #[serde(rename(serialize = "type", deserialize = "@type"), default)]
    pub ty: String,
    /// `"read"`, `"write"` or `"readwrite"`.
    #[serde(rename(deserialize = "@access"), default)]
    pub access: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    #[serde(rename(deserialize = "@name"), default)]
    pub name: String,
    #[serde(rename(deserialize = "method"), default)]
    pub methods: Vec<Method>,
    #[serde(rename(deserialize = "signal"), default)]
    pub signals: Vec<Signal>,
    #[serde(rename(deserialize = "property"), default)]
    pub properties: Vec<Property>,
}

/// Root of one parsed introspection document. Unknown elements under the
/// root (nested `<node>` children, `<annotation>`s) are ignored by the
/// decoder, so the tree holds exactly the shapes below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename(deserialize = "@name"), default)]
    pub name: String,
    #[serde(rename(deserialize = "interface"), default)]
    pub interfaces: Vec<Interface>,
}
