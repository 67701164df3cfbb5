// Command registry for Commander Core
//
// A Registry is assembled once through RegistryBuilder and is read-only
// afterwards. Each registered operation is wrapped in an adapter taking
// and returning Values; its parameter and result types are captured from
// the Rust signature when it is registered.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::types::{format_types, TypeTag};
use crate::value::Value;

/// Uniform entry point for a registered operation.
///
/// The error side carries the operation's own failure message.
pub type Adapter = Arc<dyn Fn(Vec<Value>) -> std::result::Result<Vec<Value>, String> + Send + Sync>;

/// Captured signature and adapter for one registered command.
#[derive(Clone)]
pub struct Descriptor {
    name: String,
    params: Vec<TypeTag>,
    results: Vec<TypeTag>,
    adapter: Option<Adapter>,
}

impl Descriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[TypeTag] {
        &self.params
    }

    pub fn results(&self) -> &[TypeTag] {
        &self.results
    }

    /// `None` for commands that were declared without an implementation.
    pub fn adapter(&self) -> Option<&Adapter> {
        self.adapter.as_ref()
    }

    /// `name(param, ...) -> (result, ...)`
    pub fn signature(&self) -> String {
        format!("{}{} -> {}", self.name, format_types(&self.params), format_types(&self.results))
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("results", &self.results)
            .field("callable", &self.adapter.is_some())
            .finish()
    }
}

//━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TYPED OPERATIONS
//━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A Rust type that can be taken as a command parameter.
pub trait FromValue: Sized {
    const TYPE: TypeTag;

    fn from_value(value: Value) -> Option<Self>;
}

/// A Rust type that can be returned as a single command output.
pub trait IntoValue {
    const TYPE: TypeTag;

    fn into_value(self) -> Value;
}

/// Return types of registered operations: nothing, one value, a tuple of
/// values, or a `Result` of any of those.
pub trait IntoOutputs {
    fn result_types() -> Vec<TypeTag>;

    fn into_outputs(self) -> std::result::Result<Vec<Value>, String>;
}

macro_rules! impl_value_conversions {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl FromValue for $ty {
                const TYPE: TypeTag = TypeTag::$tag;

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$tag(inner) => Some(inner),
                        _ => None,
                    }
                }
            }

            impl IntoValue for $ty {
                const TYPE: TypeTag = TypeTag::$tag;

                fn into_value(self) -> Value {
                    Value::$tag(self)
                }
            }

            impl IntoOutputs for $ty {
                fn result_types() -> Vec<TypeTag> {
                    vec![TypeTag::$tag]
                }

                fn into_outputs(self) -> std::result::Result<Vec<Value>, String> {
                    Ok(vec![Value::$tag(self)])
                }
            }
        )*
    };
}

impl_value_conversions! {
    bool => Bool,
    i64 => Int,
    f64 => Float,
    String => String,
    Vec<Value> => List,
    BTreeMap<String, Value> => Map,
}

impl IntoOutputs for () {
    fn result_types() -> Vec<TypeTag> {
        Vec::new()
    }

    fn into_outputs(self) -> std::result::Result<Vec<Value>, String> {
        Ok(Vec::new())
    }
}

impl<T: IntoOutputs, E: fmt::Display> IntoOutputs for std::result::Result<T, E> {
    fn result_types() -> Vec<TypeTag> {
        T::result_types()
    }

    fn into_outputs(self) -> std::result::Result<Vec<Value>, String> {
        self.map_err(|e| e.to_string()).and_then(IntoOutputs::into_outputs)
    }
}

macro_rules! impl_tuple_outputs {
    ($($out:ident: $ty:ident),+) => {
        impl<$($ty: IntoValue),+> IntoOutputs for ($($ty,)+) {
            fn result_types() -> Vec<TypeTag> {
                vec![$($ty::TYPE),+]
            }

            fn into_outputs(self) -> std::result::Result<Vec<Value>, String> {
                let ($($out,)+) = self;
                Ok(vec![$($out.into_value()),+])
            }
        }
    };
}

impl_tuple_outputs!(a: A, b: B);
impl_tuple_outputs!(a: A, b: B, c: C);
impl_tuple_outputs!(a: A, b: B, c: C, d: D);

/// A Rust function or closure that can be bound to a command name.
///
/// `Args` is the tuple of parameter types; it only exists so that one
/// closure type can implement the trait for exactly one arity.
pub trait Operation<Args>: Send + Sync + 'static {
    fn param_types() -> Vec<TypeTag>;

    fn result_types() -> Vec<TypeTag>;

    fn call(&self, args: Vec<Value>) -> std::result::Result<Vec<Value>, String>;
}

macro_rules! impl_operation {
    ($($arg:ident: $ty:ident),*) => {
        impl<Func, Out, $($ty,)*> Operation<($($ty,)*)> for Func
        where
            Func: Fn($($ty),*) -> Out + Send + Sync + 'static,
            Out: IntoOutputs,
            $($ty: FromValue,)*
        {
            fn param_types() -> Vec<TypeTag> {
                vec![$($ty::TYPE),*]
            }

            fn result_types() -> Vec<TypeTag> {
                Out::result_types()
            }

            #[allow(unused_mut, unused_variables)]
            fn call(&self, args: Vec<Value>) -> std::result::Result<Vec<Value>, String> {
                let mut args = args.into_iter();
                $(
                    let $arg = args
                        .next()
                        .and_then($ty::from_value)
                        .ok_or_else(|| format!("expected {} argument", $ty::TYPE))?;
                )*
                (self)($($arg),*).into_outputs()
            }
        }
    };
}

impl_operation!();
impl_operation!(a: A);
impl_operation!(a: A, b: B);
impl_operation!(a: A, b: B, c: C);
impl_operation!(a: A, b: B, c: C, d: D);
impl_operation!(a: A, b: B, c: C, d: D, e: E);
impl_operation!(a: A, b: B, c: C, d: D, e: E, f: F);

//━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// BUILDER
//━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Collects command bindings during startup.
#[derive(Default)]
pub struct RegistryBuilder {
    commands: HashMap<String, Descriptor>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a typed function or closure under `name`.
    ///
    /// ```
    /// use commander_core::{Registry, Value};
    ///
    /// let registry = Registry::builder()
    ///     .register("add", |a: i64, b: i64| a + b)
    ///     .build();
    /// let outputs = registry.call("add", vec![Value::Int(3), Value::Int(4)]).unwrap();
    /// assert_eq!(outputs, vec![Value::Int(7)]);
    /// ```
    pub fn register<Args, Op>(self, name: impl Into<String>, op: Op) -> Self
    where
        Args: 'static,
        Op: Operation<Args>,
    {
        let adapter: Adapter = Arc::new(move |args| op.call(args));
        self.insert(Descriptor {
            name: name.into(),
            params: Op::param_types(),
            results: Op::result_types(),
            adapter: Some(adapter),
        })
    }

    /// Bind an untyped adapter with an explicit signature.
    pub fn register_raw<F>(
        self,
        name: impl Into<String>,
        params: Vec<TypeTag>,
        results: Vec<TypeTag>,
        adapter: F,
    ) -> Self
    where
        F: Fn(Vec<Value>) -> std::result::Result<Vec<Value>, String> + Send + Sync + 'static,
    {
        self.insert(Descriptor {
            name: name.into(),
            params,
            results,
            adapter: Some(Arc::new(adapter)),
        })
    }

    /// Reserve a command signature without an implementation.
    pub fn declare(self, name: impl Into<String>, params: Vec<TypeTag>) -> Self {
        self.insert(Descriptor {
            name: name.into(),
            params,
            results: Vec::new(),
            adapter: None,
        })
    }

    /// Expose an already registered command under a second name.
    pub fn alias(mut self, public: impl Into<String>, existing: &str) -> Self {
        let public = public.into();
        match self.commands.get(existing) {
            Some(target) => {
                let mut descriptor = target.clone();
                descriptor.name = public;
                self.insert(descriptor)
            }
            None => {
                warn!(alias = %public, existing = %existing, "alias target is not registered");
                self
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn build(self) -> Registry {
        info!(commands = self.commands.len(), "command registry built");
        Registry { commands: self.commands }
    }

    fn insert(mut self, descriptor: Descriptor) -> Self {
        if self.commands.contains_key(&descriptor.name) {
            warn!(command = %descriptor.name, "command registered twice, keeping the latest binding");
        }
        self.commands.insert(descriptor.name.clone(), descriptor);
        self
    }
}

//━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// REGISTRY
//━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Immutable name → descriptor table.
///
/// There is no way to add or remove commands once built, so a shared
/// `&Registry` can be read from any number of threads without locking.
pub struct Registry {
    commands: HashMap<String, Descriptor>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn lookup(&self, name: &str) -> Option<&Descriptor> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Signatures of all registered commands, sorted by name.
    pub fn signatures(&self) -> Vec<String> {
        self.names()
            .into_iter()
            .filter_map(|name| self.lookup(name))
            .map(Descriptor::signature)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("commands", &self.names()).finish()
    }
}
