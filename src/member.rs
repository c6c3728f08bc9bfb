use swc_atoms::Atom;
use swc_common::{comments::Comments, comments::SingleThreadedComments, Span, Spanned};
use swc_ecma_ast::{
    Expr, Lit, ObjectPatProp, PropName, TsEnumMember, TsEnumMemberId, TsFnParam, TsTypeElement,
};

/// One entry of a sortable container, projected to the few facts the
/// scanner and fixer need. `name` is `None` when the key is dynamically
/// computed or the member kind has no key at all (call signatures, rest
/// elements); such members never sort-move relative to each other.
#[derive(Debug, Clone)]
pub struct Member {
    pub span: Span,
    pub name: Option<Atom>,
    pub optional: bool,
    pub leading_comments: Vec<Span>,
}

/// Synthesized comparison name for an index signature. The bracketed form
/// cannot collide with identifier- or literal-derived names, which is what
/// lets the comparator weight it.
pub fn index_signature_marker(param: &str) -> Atom {
    Atom::from(format!("[index: {param}]"))
}

pub fn is_index_signature_marker(name: &str) -> bool {
    name.strip_prefix("[index: ")
        .and_then(|rest| rest.rfind(']'))
        .is_some_and(|i| i >= 1)
}

impl Member {
    pub fn from_type_element(element: &TsTypeElement, comments: &SingleThreadedComments) -> Self {
        let (name, optional) = match element {
            TsTypeElement::TsPropertySignature(sig) => (key_name(&sig.key), sig.optional),
            TsTypeElement::TsMethodSignature(sig) => (key_name(&sig.key), sig.optional),
            TsTypeElement::TsGetterSignature(sig) => (key_name(&sig.key), false),
            TsTypeElement::TsSetterSignature(sig) => (key_name(&sig.key), false),
            TsTypeElement::TsIndexSignature(sig) => {
                let name = sig.params.first().and_then(|param| match param {
                    TsFnParam::Ident(ident) => Some(index_signature_marker(&ident.id.sym)),
                    _ => None,
                });
                (name, false)
            }
            TsTypeElement::TsCallSignatureDecl(_) | TsTypeElement::TsConstructSignatureDecl(_) => {
                (None, false)
            }
        };

        Self::new(element.span(), name, optional, comments)
    }

    pub fn from_enum_member(member: &TsEnumMember, comments: &SingleThreadedComments) -> Self {
        let name = match &member.id {
            TsEnumMemberId::Ident(ident) => Some(ident.sym.clone()),
            TsEnumMemberId::Str(s) => Some(s.value.clone()),
        };

        Self::new(member.span, name, false, comments)
    }

    /// Destructured parameter entries. Only identifier-keyed properties and
    /// rest elements participate; everything else (literal or computed
    /// keys, nested patterns behind them) is dropped from the list.
    pub fn from_object_pat_prop(
        prop: &ObjectPatProp,
        comments: &SingleThreadedComments,
    ) -> Option<Self> {
        match prop {
            ObjectPatProp::KeyValue(kv) => match &kv.key {
                PropName::Ident(ident) => Some(Self::new(
                    kv.span(),
                    Some(ident.sym.clone()),
                    false,
                    comments,
                )),
                _ => None,
            },
            ObjectPatProp::Assign(assign) => Some(Self::new(
                assign.span,
                Some(assign.key.id.sym.clone()),
                false,
                comments,
            )),
            ObjectPatProp::Rest(rest) => Some(Self::new(rest.span, None, false, comments)),
        }
    }

    fn new(
        span: Span,
        name: Option<Atom>,
        optional: bool,
        comments: &SingleThreadedComments,
    ) -> Self {
        let leading_comments = comments
            .get_leading(span.lo)
            .map(|list| list.iter().map(|c| c.span).collect())
            .unwrap_or_default();

        Self {
            span,
            name,
            optional,
            leading_comments,
        }
    }
}

/// Identifier text or stringified literal value of a key expression.
fn key_name(key: &Expr) -> Option<Atom> {
    match key {
        Expr::Ident(ident) => Some(ident.sym.clone()),
        Expr::Lit(Lit::Str(s)) => Some(s.value.clone()),
        Expr::Lit(Lit::Num(n)) => Some(Atom::from(js_number_to_string(n.value))),
        _ => None,
    }
}

/// Matches JavaScript's `String(value)` for the numeric keys that occur in
/// practice (integral values print without a fraction).
fn js_number_to_string(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
