use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use std::sync::OnceLock;

use indexmap::IndexMap;
use vc_reflect::Reflect;
use vc_reflect::info::{NamedField, StructInfo, VariantValue};
use vc_reflect::ops::{DateTime, Enum, List, Map, ReflectRef, Struct};

use super::SerializeOptions;
use super::visibility::VisibilityFilter;
use crate::{Alias, AliasFn, AliasGenerator, Ignore, Primitive, SerializeError, SerializerConfig};

// -----------------------------------------------------------------------------
// Serializer

/// Converts reflected values into [`Primitive`] trees.
///
/// A `Serializer` holds an immutable [`SerializerConfig`] and two lazily
/// computed caches: the resolved visibility filter and the alias generator of
/// the type being serialized. Each nested non-scalar value is serialized by a
/// fork that shares the configuration and the visibility filter and starts
/// with an empty alias generator cache. A type without [`AliasGenerator`]
/// metadata inherits the generator of its parent.
///
/// Calls never mutate the configuration, so one serializer can be reused and
/// shared between threads.
///
/// # Examples
///
/// ```
/// use vc_reflect::derive::Reflect;
/// use vc_serialize::{SerializeOptions, Serializer, formats};
///
/// #[derive(Reflect)]
/// struct Point {
///     pub x: i32,
///     pub y: i32,
///     label: Option<String>,
/// }
///
/// let serializer = Serializer::new(["public"], formats::ATOM);
/// let point = Point { x: 1, y: -2, label: None };
///
/// let output = serializer.serialize(&point, SerializeOptions::new()).unwrap();
/// assert_eq!(serde_json::to_string(&output).unwrap(), r#"{"x":1,"y":-2}"#);
///
/// let output = serializer
///     .serialize(&point, SerializeOptions::new().use_visibility_methods(false))
///     .unwrap();
/// assert_eq!(serde_json::to_string(&output).unwrap(), r#"{"x":1,"y":-2,"label":null}"#);
/// ```
pub struct Serializer {
    config: Arc<SerializerConfig>,
    visibility: OnceLock<VisibilityFilter>,
    inherited_alias: AliasFn,
    alias_generator: OnceLock<AliasFn>,
}

impl Serializer {
    /// Creates a serializer allowing the given visibility tokens and
    /// rendering datetimes with `datetime_format`.
    ///
    /// Tokens are validated by the first call to [`serialize`](Self::serialize).
    pub fn new<I, S>(allow: I, datetime_format: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(
            SerializerConfig::new()
                .allow(allow)
                .datetime_format(datetime_format),
        )
    }

    /// Creates a serializer from a full configuration.
    pub fn with_config(config: SerializerConfig) -> Self {
        let inherited_alias = config.default_alias_generator();
        Self {
            config: Arc::new(config),
            visibility: OnceLock::new(),
            inherited_alias,
            alias_generator: OnceLock::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    /// Converts `value` into a [`Primitive`].
    ///
    /// # Errors
    ///
    /// See [`SerializeError`]. The first error aborts the whole call.
    pub fn serialize(
        &self,
        value: &dyn Reflect,
        options: SerializeOptions,
    ) -> Result<Primitive, SerializeError> {
        self.visibility()?;
        self.fork().dispatch(value, options)
    }

    /// Creates a copy sharing the configuration with fresh caches.
    ///
    /// The visibility filter is copied once resolved, the alias generator
    /// becomes the inherited one.
    fn fork(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            visibility: self.visibility.clone(),
            inherited_alias: self
                .alias_generator
                .get()
                .copied()
                .unwrap_or(self.inherited_alias),
            alias_generator: OnceLock::new(),
        }
    }

    fn visibility(&self) -> Result<VisibilityFilter, SerializeError> {
        if let Some(filter) = self.visibility.get() {
            return Ok(*filter);
        }
        let filter = VisibilityFilter::resolve(self.config.allowed())?;
        log::debug!("resolved visibility filter: {filter}");
        Ok(*self.visibility.get_or_init(|| filter))
    }

    fn alias_generator(&self, info: &StructInfo) -> Result<AliasFn, SerializeError> {
        if let Some(generator) = self.alias_generator.get() {
            return Ok(*generator);
        }
        let generator = match info.get_attribute::<AliasGenerator>() {
            Some(meta) => {
                let generator =
                    meta.generator()
                        .map_err(|err| SerializeError::UnknownAliasGenerator {
                            type_name: info.type_name(),
                            name: err.name,
                        })?;
                log::debug!("resolved {meta:?} for `{}`", info.type_name());
                generator
            }
            None => self.inherited_alias,
        };
        Ok(*self.alias_generator.get_or_init(|| generator))
    }

    fn dispatch(
        &self,
        value: &dyn Reflect,
        options: SerializeOptions,
    ) -> Result<Primitive, SerializeError> {
        let view = value.reflect_ref();
        log::trace!("serializing {} `{}`", view.kind(), value.reflect_type_name());

        match view {
            ReflectRef::Record(record) => self.fork().serialize_map(record.as_map(), options),
            ReflectRef::DateTime(datetime) => self.serialize_datetime(datetime),
            ReflectRef::List(list) => self.serialize_list(list, options),
            ReflectRef::Map(map) => self.serialize_map(map, options),
            ReflectRef::Enum(value) => serialize_enum(value),
            ReflectRef::Struct(value) => self.serialize_struct(value, options),
            ReflectRef::Scalar(scalar) => Ok(scalar.into()),
        }
    }

    /// Keeps scalars, serializes other values through a fork.
    fn descend(
        &self,
        value: &dyn Reflect,
        options: SerializeOptions,
    ) -> Result<Primitive, SerializeError> {
        match value.reflect_ref() {
            ReflectRef::Scalar(scalar) => Ok(scalar.into()),
            _ => self.fork().dispatch(value, options),
        }
    }

    fn serialize_datetime(&self, value: &dyn DateTime) -> Result<Primitive, SerializeError> {
        let format = self.config.format();
        value
            .format_with(format)
            .map(Primitive::String)
            .map_err(|_| SerializeError::DateTimeFormat {
                type_name: value.reflect_type_name(),
                format: format.to_owned(),
            })
    }

    fn serialize_list(
        &self,
        list: &dyn List,
        options: SerializeOptions,
    ) -> Result<Primitive, SerializeError> {
        list.iter()
            .map(|item| self.descend(item, options))
            .collect::<Result<_, _>>()
            .map(Primitive::Seq)
    }

    fn serialize_map(
        &self,
        map: &dyn Map,
        options: SerializeOptions,
    ) -> Result<Primitive, SerializeError> {
        let mut data = IndexMap::with_capacity(map.len());
        for (key, value) in map.iter() {
            data.insert(key.into_owned(), self.descend(value, options)?);
        }
        Ok(Primitive::Map(data))
    }

    fn serialize_struct(
        &self,
        value: &dyn Struct,
        options: SerializeOptions,
    ) -> Result<Primitive, SerializeError> {
        let info = value.struct_info();
        let mut data = IndexMap::with_capacity(value.field_len());

        for (field, field_value) in value.iter_fields() {
            if !field_value.is_initialized() {
                log::trace!(
                    "skipping uninitialized field `{}::{}`",
                    info.type_name(),
                    field.name()
                );
                continue;
            }
            if !self.includes(field, options)? {
                continue;
            }
            let name = self.field_name(info, field, options)?;
            data.insert(name, self.descend(field_value, options)?);
        }

        Ok(Primitive::Map(data))
    }

    /// Ignore metadata alone decides when honoured, visibility otherwise.
    fn includes(
        &self,
        field: &NamedField,
        options: SerializeOptions,
    ) -> Result<bool, SerializeError> {
        if options.use_ignores
            && let Some(ignore) = field.get_attribute::<Ignore>()
        {
            return Ok(if options.use_validation {
                !ignore.ignores_validation()
            } else {
                !ignore.ignores_serialization()
            });
        }

        if !options.use_visibility_methods {
            return Ok(true);
        }
        Ok(self.visibility()?.allows(field.visibility()))
    }

    fn field_name(
        &self,
        info: &StructInfo,
        field: &NamedField,
        options: SerializeOptions,
    ) -> Result<String, SerializeError> {
        let raw = field.name();
        if !options.by_alias {
            return Ok(raw.to_owned());
        }

        let generator = self.alias_generator(info)?;
        let name = match field.get_attribute::<Alias>() {
            Some(alias) => alias.alias(raw).into_owned(),
            None => generator(raw),
        };

        if name.is_empty() {
            log::warn!(
                "field `{}::{raw}` resolved to an empty name, using the declared name",
                info.type_name()
            );
            return Ok(raw.to_owned());
        }
        Ok(name)
    }
}

fn serialize_enum(value: &dyn Enum) -> Result<Primitive, SerializeError> {
    let wrap = |source| SerializeError::Enum {
        type_name: value.enum_info().type_name(),
        source,
    };

    match value.backing().map_err(wrap)? {
        Some(VariantValue::Int(v)) => Ok(Primitive::Int(v)),
        Some(VariantValue::Str(v)) => Ok(Primitive::String(v.to_owned())),
        None => value
            .variant_name()
            .map(|name| Primitive::String(name.to_owned()))
            .map_err(wrap),
    }
}

impl Default for Serializer {
    /// All visibilities allowed, datetimes in [`formats::ATOM`].
    ///
    /// [`formats::ATOM`]: crate::formats::ATOM
    #[inline]
    fn default() -> Self {
        Self::with_config(SerializerConfig::new())
    }
}

impl fmt::Debug for Serializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Serializer")
            .field("config", &self.config)
            .field("visibility", &self.visibility.get())
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
#[allow(non_snake_case, dead_code)]
mod tests {
    use std::collections::{BTreeMap, HashMap};
    use std::sync::OnceLock;

    use vc_reflect::derive::Reflect;
    use vc_reflect::ops::DynamicRecord;

    use super::Serializer;
    use crate::{
        Alias, AliasGenerator, ErrorKind, Ignore, Primitive, SerializeError, SerializeOptions,
        formats,
    };

    fn json(value: &Primitive) -> String {
        serde_json::to_string(value).unwrap()
    }

    fn serialize(value: &dyn vc_reflect::Reflect) -> Primitive {
        Serializer::default()
            .serialize(value, SerializeOptions::new())
            .unwrap()
    }

    // -------------------------------------------------------------------------
    // Options scenario

    #[derive(Reflect)]
    struct Post {
        #[reflect(@Ignore::new().validation(false))]
        pub myPostId: u32,
        #[reflect(@Alias::new("my_title"))]
        pub title: String,
    }

    #[derive(Reflect)]
    struct Profile {
        pub myPost: Post,
    }

    #[derive(Reflect)]
    #[reflect(@AliasGenerator::snake())]
    struct User {
        pub profile: Profile,
        pub fullName: String,
    }

    fn user() -> User {
        User {
            profile: Profile {
                myPost: Post {
                    myPostId: 1,
                    title: "T".into(),
                },
            },
            fullName: "Andre Gil".into(),
        }
    }

    #[test]
    fn nested_options() {
        assert_eq!(
            json(&serialize(&user())),
            r#"{"profile":{"my_post":{"my_title":"T"}},"full_name":"Andre Gil"}"#
        );
    }

    #[test]
    fn nested_options_for_validation() {
        let output = Serializer::default()
            .serialize(&user(), SerializeOptions::new().use_validation(true))
            .unwrap();
        assert_eq!(
            json(&output),
            r#"{"profile":{"my_post":{"my_post_id":1,"my_title":"T"}},"full_name":"Andre Gil"}"#
        );
    }

    #[test]
    fn by_alias_disabled() {
        let output = Serializer::default()
            .serialize(&user(), SerializeOptions::new().by_alias(false))
            .unwrap();
        assert_eq!(
            json(&output),
            r#"{"profile":{"myPost":{"title":"T"}},"fullName":"Andre Gil"}"#
        );
    }

    // -------------------------------------------------------------------------
    // Ignores

    #[derive(Reflect)]
    struct Modes {
        #[reflect(@Ignore::new().validation(false))]
        pub validation: String,
        #[reflect(@Ignore::new().serialization(false))]
        pub serialization: String,
        #[reflect(@Ignore::new().serialization(false))]
        hidden: String,
    }

    fn modes() -> Modes {
        Modes {
            validation: "validation".into(),
            serialization: "serialization".into(),
            hidden: "hidden".into(),
        }
    }

    #[test]
    fn ignores() {
        let serializer = Serializer::new(["public"], formats::ATOM);

        let output = serializer.serialize(&modes(), SerializeOptions::new()).unwrap();
        assert_eq!(
            json(&output),
            r#"{"serialization":"serialization","hidden":"hidden"}"#
        );

        let options = SerializeOptions::new().use_validation(true);
        let output = serializer.serialize(&modes(), options).unwrap();
        assert_eq!(json(&output), r#"{"validation":"validation"}"#);

        let options = SerializeOptions::new().use_ignores(false);
        let output = serializer.serialize(&modes(), options).unwrap();
        assert_eq!(
            json(&output),
            r#"{"validation":"validation","serialization":"serialization"}"#
        );

        let options = options.use_visibility_methods(false);
        let output = serializer.serialize(&modes(), options).unwrap();
        assert_eq!(
            json(&output),
            r#"{"validation":"validation","serialization":"serialization","hidden":"hidden"}"#
        );
    }

    #[test]
    fn ignores_win_over_visibility() {
        let serializer = Serializer::new(["public"], formats::ATOM);
        for use_visibility_methods in [true, false] {
            let options = SerializeOptions::new().use_visibility_methods(use_visibility_methods);
            let output = serializer.serialize(&modes(), options).unwrap();
            assert!(output.get("hidden").is_some());
            assert!(output.get("validation").is_none());

            let output = serializer
                .serialize(&modes(), options.use_validation(true))
                .unwrap();
            assert!(output.get("hidden").is_none());
            assert!(output.get("validation").is_some());
        }
    }

    // -------------------------------------------------------------------------
    // Visibility

    #[derive(Reflect)]
    struct Visibilities {
        pub public: String,
        private: String,
        pub(crate) protected: String,
    }

    fn visibilities() -> Visibilities {
        Visibilities {
            public: "public".into(),
            private: "private".into(),
            protected: "protected".into(),
        }
    }

    #[test]
    fn visibility_filter() {
        for mask in 0..8_u8 {
            let allow: Vec<&str> = ["public", "private", "protected"]
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << *i) != 0)
                .map(|(_, token)| token)
                .collect();
            let shown = if allow.is_empty() {
                vec!["public", "private", "protected"]
            } else {
                allow.clone()
            };
            let expected: Vec<String> = shown
                .into_iter()
                .map(|v| format!(r#""{v}":"{v}""#))
                .collect();
            let expected = format!("{{{}}}", expected.join(","));

            let serializer = Serializer::new(allow.clone(), formats::ATOM);
            let output = serializer
                .serialize(&visibilities(), SerializeOptions::new())
                .unwrap();
            assert_eq!(json(&output), expected, "allow = {allow:?}");

            let output = serializer
                .serialize(
                    &visibilities(),
                    SerializeOptions::new().use_visibility_methods(false),
                )
                .unwrap();
            assert_eq!(
                json(&output),
                r#"{"public":"public","private":"private","protected":"protected"}"#
            );
        }
    }

    #[test]
    fn visibility_collapse() {
        let all = Serializer::new(["PUBLIC", "private", "Protected"], formats::ATOM);
        let none = Serializer::new(Vec::<String>::new(), formats::ATOM);
        for options in [
            SerializeOptions::new(),
            SerializeOptions::new().use_visibility_methods(false),
        ] {
            assert_eq!(
                all.serialize(&visibilities(), options).unwrap(),
                none.serialize(&visibilities(), options).unwrap()
            );
        }
    }

    #[test]
    fn invalid_visibility_is_lazy() {
        for token in ["invalid", "123", "false", "", "9.1"] {
            let serializer = Serializer::new(["public", token], formats::ATOM);
            let err = serializer
                .serialize(&visibilities(), SerializeOptions::new())
                .unwrap_err();
            assert!(matches!(&err, SerializeError::InvalidVisibility(t) if t == token));
            assert_eq!(err.kind(), ErrorKind::Configuration);

            // Raised even when nothing would be filtered.
            let options = SerializeOptions::new().use_visibility_methods(false);
            assert!(serializer.serialize(&1_u8, options).is_err());
        }
    }

    // -------------------------------------------------------------------------
    // Aliases

    #[derive(Reflect)]
    #[reflect(@AliasGenerator::snake())]
    struct Renamed {
        #[reflect(@Alias::new("Random"))]
        pub camelCase: String,
        pub secondCamelCase: String,
        #[reflect(@Alias::raw())]
        pub keepMe: bool,
        #[reflect(@Alias::new(""))]
        pub emptyAlias: bool,
    }

    #[test]
    fn alias_precedence() {
        let value = Renamed {
            camelCase: "a".into(),
            secondCamelCase: "b".into(),
            keepMe: true,
            emptyAlias: false,
        };

        let output = serialize(&value);
        assert_eq!(
            json(&output),
            r#"{"Random":"a","second_camel_case":"b","keepMe":true,"emptyAlias":false}"#
        );

        let output = Serializer::default()
            .serialize(&value, SerializeOptions::new().by_alias(false))
            .unwrap();
        assert_eq!(
            json(&output),
            r#"{"camelCase":"a","secondCamelCase":"b","keepMe":true,"emptyAlias":false}"#
        );
    }

    #[derive(Reflect)]
    struct Plain {
        pub firstName: String,
        pub nested: Inner,
    }

    #[derive(Reflect)]
    #[reflect(@AliasGenerator::kebab())]
    struct Inner {
        pub lastName: String,
    }

    #[test]
    fn generator_isolation() {
        let serializer = Serializer::default();
        let options = SerializeOptions::new();

        let first = serializer.serialize(&user(), options).unwrap();
        assert!(first.get("full_name").is_some());

        let plain = Plain {
            firstName: "Andre".into(),
            nested: Inner {
                lastName: "Gil".into(),
            },
        };
        let second = serializer.serialize(&plain, options).unwrap();
        assert_eq!(
            json(&second),
            r#"{"firstName":"Andre","nested":{"last-name":"Gil"}}"#
        );

        // Siblings in a container do not see each other's generator.
        let mixed: Vec<Box<dyn vc_reflect::Reflect>> = vec![
            Box::new(Inner {
                lastName: "a".into(),
            }),
            Box::new(Plain {
                firstName: "b".into(),
                nested: Inner {
                    lastName: "c".into(),
                },
            }),
        ];
        let record: DynamicRecord = mixed
            .into_iter()
            .enumerate()
            .map(|(i, value)| (i.to_string(), value))
            .collect();
        assert_eq!(
            json(&serializer.serialize(&record, options).unwrap()),
            r#"{"0":{"last-name":"a"},"1":{"firstName":"b","nested":{"last-name":"c"}}}"#
        );
    }

    #[test]
    fn config_alias_generator_is_the_root() {
        let serializer = Serializer::with_config(
            crate::SerializerConfig::new().alias_generator(|name| name.to_uppercase()),
        );
        let plain = Plain {
            firstName: "Andre".into(),
            nested: Inner {
                lastName: "Gil".into(),
            },
        };
        let output = serializer.serialize(&plain, SerializeOptions::new()).unwrap();
        assert_eq!(
            json(&output),
            r#"{"FIRSTNAME":"Andre","NESTED":{"last-name":"Gil"}}"#
        );
    }

    #[derive(Reflect)]
    #[reflect(@AliasGenerator::new("missing"))]
    struct Unknown {
        pub id: u8,
    }

    #[test]
    fn unknown_generator() {
        let err = Serializer::default()
            .serialize(&Unknown { id: 1 }, SerializeOptions::new())
            .unwrap_err();
        match err {
            SerializeError::UnknownAliasGenerator { type_name, name } => {
                assert!(type_name.ends_with("Unknown"));
                assert_eq!(name, "missing");
            }
            other => panic!("unexpected error: {other}"),
        }

        // Not resolved when names are not aliased.
        let output = Serializer::default()
            .serialize(&Unknown { id: 1 }, SerializeOptions::new().by_alias(false))
            .unwrap();
        assert_eq!(json(&output), r#"{"id":1}"#);
    }

    // -------------------------------------------------------------------------
    // Containers

    #[derive(Reflect)]
    struct ListedPost {
        pub id: u32,
        pub title: String,
        pub published: u32,
    }

    fn posts(count: u32, published: impl Fn(u32) -> u32) -> Vec<ListedPost> {
        (0..count)
            .map(|id| ListedPost {
                id,
                title: "My post title".into(),
                published: published(id),
            })
            .collect()
    }

    #[test]
    fn list_of_objects() {
        let output = serialize(&posts(3, |_| 10));
        assert_eq!(
            json(&output),
            concat!(
                r#"[{"id":0,"title":"My post title","published":10},"#,
                r#"{"id":1,"title":"My post title","published":10},"#,
                r#"{"id":2,"title":"My post title","published":10}]"#,
            )
        );
    }

    #[derive(Reflect)]
    struct WithPosts {
        pub arrayOfPosts: Vec<ListedPost>,
    }

    #[derive(Reflect)]
    struct WithNested {
        pub nestedArray: DynamicRecord,
    }

    #[test]
    fn containers_in_fields() {
        let value = WithPosts {
            arrayOfPosts: posts(2, |id| 10 + id),
        };
        assert_eq!(
            json(&serialize(&value)),
            concat!(
                r#"{"arrayOfPosts":[{"id":0,"title":"My post title","published":10},"#,
                r#"{"id":1,"title":"My post title","published":11}]}"#,
            )
        );

        let mut nested = DynamicRecord::new();
        nested.insert("number", 123_i32);
        nested.insert("nested", posts(2, |id| 10 + id));

        let mut record = DynamicRecord::new();
        record.insert("string", "string");
        record.insert("nested", nested);

        let value = WithNested {
            nestedArray: record,
        };
        assert_eq!(
            json(&serialize(&value)),
            concat!(
                r#"{"nestedArray":{"string":"string","nested":{"number":123,"nested":["#,
                r#"{"id":0,"title":"My post title","published":10},"#,
                r#"{"id":1,"title":"My post title","published":11}]}}}"#,
            )
        );
    }

    #[test]
    fn loose_record() {
        let mut record = DynamicRecord::new();
        record.insert("id", 1_u8);
        record.insert("title", String::from("My post title"));
        assert_eq!(
            json(&serialize(&record)),
            r#"{"id":1,"title":"My post title"}"#
        );
    }

    #[test]
    fn map_keys_are_strings() {
        let mut map = BTreeMap::new();
        map.insert(2_u8, vec!['a']);
        map.insert(1_u8, vec![]);
        assert_eq!(json(&serialize(&map)), r#"{"1":[],"2":["a"]}"#);

        let mut map = HashMap::new();
        map.insert(String::from("only"), Some(1.5_f32));
        assert_eq!(json(&serialize(&map)), r#"{"only":1.5}"#);
    }

    #[test]
    fn scalars_at_the_root() {
        assert_eq!(serialize(&7_i16), Primitive::Int(7));
        assert_eq!(serialize(&Option::<u8>::None), Primitive::Null);
        assert_eq!(serialize(&"text"), Primitive::from("text"));
        assert_eq!(serialize(&[true, false]), Primitive::Seq(vec![true.into(), false.into()]));
    }

    // -------------------------------------------------------------------------
    // Enums

    #[derive(Reflect)]
    enum Role {
        Admin,
        Guest,
    }

    #[derive(Reflect)]
    enum IntRole {
        Admin = 0,
        Guest = 1,
    }

    #[derive(Reflect)]
    enum StrRole {
        #[reflect(value = "admin")]
        Admin,
        #[reflect(value = "guest")]
        Guest,
    }

    #[derive(Reflect)]
    enum Shape {
        Circle { radius: f64 },
        Empty,
    }

    #[test]
    fn enums() {
        assert_eq!(serialize(&Role::Admin), Primitive::from("Admin"));
        assert_eq!(serialize(&IntRole::Guest), Primitive::Int(1));
        assert_eq!(serialize(&StrRole::Admin), Primitive::from("admin"));
        assert_eq!(serialize(&Shape::Empty), Primitive::from("Empty"));

        let err = Serializer::default()
            .serialize(&Shape::Circle { radius: 1.0 }, SerializeOptions::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Introspection);
        assert!(matches!(err, SerializeError::Enum { .. }));
    }

    // -------------------------------------------------------------------------
    // Initialization

    #[derive(Reflect)]
    struct Lazy {
        hello: OnceLock<String>,
    }

    #[test]
    fn uninitialized_fields() {
        let value = Lazy {
            hello: OnceLock::new(),
        };
        assert_eq!(serialize(&value), Primitive::Map(Default::default()));

        let _ = value.hello.set("world".into());
        assert_eq!(json(&serialize(&value)), r#"{"hello":"world"}"#);
    }

    // -------------------------------------------------------------------------
    // Datetimes

    #[cfg(feature = "chrono")]
    mod datetimes {
        use chrono::{DateTime, NaiveDate, TimeZone, Utc};
        use vc_reflect::derive::Reflect;

        use super::json;
        use crate::{ErrorKind, Primitive, SerializeError, SerializeOptions, Serializer, formats};

        fn datetime() -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2025, 3, 31, 18, 0, 0).unwrap()
        }

        #[test]
        fn idempotent_formatting() {
            let cases = [
                (formats::ATOM, "2025-03-31T18:00:00+00:00"),
                (formats::COOKIE, "Monday, 31-Mar-2025 18:00:00 UTC"),
            ];
            for (format, expected) in cases {
                let serializer = Serializer::new(["public"], format);
                let first = serializer.serialize(&datetime(), SerializeOptions::new()).unwrap();
                let second = serializer.serialize(&datetime(), SerializeOptions::new()).unwrap();
                assert_eq!(first, Primitive::from(expected));
                assert_eq!(first, second);
                assert_eq!(first, Primitive::from(datetime().format(format).to_string()));
            }
        }

        #[derive(Reflect)]
        enum UserType {
            #[reflect(value = "admin")]
            Admin,
            #[reflect(value = "guest")]
            Guest,
        }

        #[derive(Reflect)]
        struct Post {
            pub id: u32,
            pub title: String,
            pub published: DateTime<Utc>,
        }

        #[derive(Reflect)]
        struct Profile {
            pub id: String,
            pub firstName: String,
            pub lastName: String,
            pub post: Post,
        }

        #[derive(Reflect)]
        struct User {
            pub profile: Profile,
            pub userType: UserType,
            pub createdAt: DateTime<Utc>,
        }

        #[test]
        fn nested_with_datetimes() {
            let user = User {
                profile: Profile {
                    id: "67ea1c9e".into(),
                    firstName: "Andre".into(),
                    lastName: "Gil".into(),
                    post: Post {
                        id: 1,
                        title: "My post title".into(),
                        published: datetime(),
                    },
                },
                userType: UserType::Guest,
                createdAt: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            };

            for format in [formats::ATOM, formats::COOKIE] {
                let output = Serializer::new(Vec::<String>::new(), format)
                    .serialize(&user, SerializeOptions::new())
                    .unwrap();
                let expected = format!(
                    concat!(
                        r#"{{"profile":{{"id":"67ea1c9e","firstName":"Andre","lastName":"Gil","#,
                        r#""post":{{"id":1,"title":"My post title","published":"{}"}}}},"#,
                        r#""userType":"guest","createdAt":"{}"}}"#,
                    ),
                    user.profile.post.published.format(format),
                    user.createdAt.format(format),
                );
                assert_eq!(json(&output), expected);
            }
        }

        #[test]
        fn unrenderable_format() {
            let date = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
            let err = Serializer::default()
                .serialize(&date, SerializeOptions::new())
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration);
            assert!(matches!(
                err,
                SerializeError::DateTimeFormat { format, .. } if format == formats::ATOM
            ));

            let output = Serializer::new(["public"], "%d/%m/%Y")
                .serialize(&date, SerializeOptions::new())
                .unwrap();
            assert_eq!(output, Primitive::from("31/03/2025"));
        }
    }

    #[test]
    fn shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Serializer>();
    }
}
