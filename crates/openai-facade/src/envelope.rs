//! Request envelopes.
//!
//! Every façade method takes exactly one of three call shapes. A shape is
//! pure structure: decomposing it hands back the parts exactly as they were
//! supplied, and recomposing those parts rebuilds the same envelope.

use facade_common::RequestOptions;

/// The three argument shapes a façade method can accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CallShape {
    /// `{ body, options }` for create and update operations.
    Body,
    /// `{ query, options }` for list operations.
    Query,
    /// `(id, options?)` for retrieve, delete and cancel operations.
    Identifier,
}

/// Structural split of an envelope into its parts and back.
pub trait Decompose: Sized {
    type Parts;

    /// Fixed by the envelope type, never by its contents.
    const SHAPE: CallShape;

    fn into_parts(self) -> Self::Parts;

    fn from_parts(parts: Self::Parts) -> Self;
}

/// A write payload plus optional transport options.
#[derive(Debug, Clone, Default)]
pub struct BodyCall<B> {
    pub body: B,
    pub options: Option<RequestOptions>,
}

impl<B> BodyCall<B> {
    pub fn new(body: B) -> Self {
        Self {
            body,
            options: None,
        }
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = Some(options);
        self
    }
}

impl<B> From<B> for BodyCall<B> {
    fn from(body: B) -> Self {
        Self::new(body)
    }
}

impl<B> Decompose for BodyCall<B> {
    type Parts = (B, Option<RequestOptions>);
    const SHAPE: CallShape = CallShape::Body;

    fn into_parts(self) -> Self::Parts {
        (self.body, self.options)
    }

    fn from_parts((body, options): Self::Parts) -> Self {
        Self { body, options }
    }
}

/// Read filters plus optional transport options.
#[derive(Debug, Clone, Default)]
pub struct QueryCall<Q> {
    pub query: Q,
    pub options: Option<RequestOptions>,
}

impl<Q> QueryCall<Q> {
    pub fn new(query: Q) -> Self {
        Self {
            query,
            options: None,
        }
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = Some(options);
        self
    }
}

impl<Q> From<Q> for QueryCall<Q> {
    fn from(query: Q) -> Self {
        Self::new(query)
    }
}

impl<Q> Decompose for QueryCall<Q> {
    type Parts = (Q, Option<RequestOptions>);
    const SHAPE: CallShape = CallShape::Query;

    fn into_parts(self) -> Self::Parts {
        (self.query, self.options)
    }

    fn from_parts((query, options): Self::Parts) -> Self {
        Self { query, options }
    }
}

/// A resource identifier plus optional transport options.
#[derive(Debug, Clone, Default)]
pub struct IdentifierCall {
    pub id: String,
    pub options: Option<RequestOptions>,
}

impl IdentifierCall {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = Some(options);
        self
    }
}

impl From<&str> for IdentifierCall {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for IdentifierCall {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl<S: Into<String>> From<(S, RequestOptions)> for IdentifierCall {
    fn from((id, options): (S, RequestOptions)) -> Self {
        Self::new(id).with_options(options)
    }
}

impl Decompose for IdentifierCall {
    type Parts = (String, Option<RequestOptions>);
    const SHAPE: CallShape = CallShape::Identifier;

    fn into_parts(self) -> Self::Parts {
        (self.id, self.options)
    }

    fn from_parts((id, options): Self::Parts) -> Self {
        Self { id, options }
    }
}

/// Any inbound call, tagged with its shape.
#[derive(Debug, Clone)]
pub enum CallRequest<B, Q> {
    Body(BodyCall<B>),
    Query(QueryCall<Q>),
    Identifier(IdentifierCall),
}

impl<B, Q> CallRequest<B, Q> {
    pub fn shape(&self) -> CallShape {
        match self {
            Self::Body(_) => CallShape::Body,
            Self::Query(_) => CallShape::Query,
            Self::Identifier(_) => CallShape::Identifier,
        }
    }

    pub fn options(&self) -> Option<&RequestOptions> {
        match self {
            Self::Body(call) => call.options.as_ref(),
            Self::Query(call) => call.options.as_ref(),
            Self::Identifier(call) => call.options.as_ref(),
        }
    }
}

impl<B, Q> From<BodyCall<B>> for CallRequest<B, Q> {
    fn from(call: BodyCall<B>) -> Self {
        Self::Body(call)
    }
}

impl<B, Q> From<QueryCall<Q>> for CallRequest<B, Q> {
    fn from(call: QueryCall<Q>) -> Self {
        Self::Query(call)
    }
}

impl<B, Q> From<IdentifierCall> for CallRequest<B, Q> {
    fn from(call: IdentifierCall) -> Self {
        Self::Identifier(call)
    }
}
