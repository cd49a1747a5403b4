//! Per-field visibility for response values.
//!
//! A [`Redact`] implementation produces a clone of a value in which every
//! non-exportable field has been reset to its type's default, so the field
//! decodes to its zero value on the other side. This is independent of the
//! serializer's own skip attributes: `#[serde(skip)]` removes a field from
//! the wire entirely, redaction blanks its value. A field hidden by either
//! mechanism never carries its value into output.
//!
//! Implementations are written per type, either by hand or through
//! [`redact_fields!`], which expands to a struct literal so that a field
//! missing from the visibility table is a compile error. Struct-shaped
//! fields recurse through their own implementation; scalars copy verbatim.
//! Values reached through `Option`, `Vec`, `Box`, or a map redact their
//! contents in place. A `Box<dyn RedactBoxed>` redacts through the
//! contained value's concrete implementation, so a dynamically-typed
//! payload still honors its own visibility table.

use std::any::Any;
use std::collections::HashMap;
use std::hash::Hash;

/// A value that can produce a copy of itself with hidden fields blanked.
///
/// `redacted` must leave exportable fields intact (recursing into nested
/// values) and reset hidden fields to `Default::default()`. Depth is
/// bounded by the value's own nesting; the owning containers supported
/// here cannot form reference cycles.
pub trait Redact: Sized {
    /// Produce the redacted copy.
    fn redacted(&self) -> Self;
}

/// Object-safe companion to [`Redact`] for dynamically-typed payloads.
///
/// Implemented for every `T: Redact + 'static`, so a `Box<dyn RedactBoxed>`
/// field redacts through the concrete type it holds at runtime.
///
/// `dyn RedactBoxed` carries no serialization bound, so a redacted box
/// cannot flow through [`Encodable`](crate::encode::Encodable) or an
/// encoder's `encode_redacted` on its own: recover the concrete value
/// with `downcast_ref` first and encode that.
pub trait RedactBoxed {
    /// Produce the redacted copy behind a fresh box.
    fn redacted_boxed(&self) -> Box<dyn RedactBoxed>;

    /// The value as [`Any`], for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Redact + 'static> RedactBoxed for T {
    fn redacted_boxed(&self) -> Box<dyn RedactBoxed> {
        Box::new(self.redacted())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Redact for Box<dyn RedactBoxed> {
    fn redacted(&self) -> Self {
        self.as_ref().redacted_boxed()
    }
}

impl dyn RedactBoxed {
    /// Recover the concrete type behind a dynamically-typed payload.
    ///
    /// Use this rather than calling [`RedactBoxed::as_any`] on a box
    /// receiver: `Box<dyn RedactBoxed>` satisfies the blanket impl
    /// itself, so `as_any` there reports the box, not the contained
    /// value. Going through `&dyn RedactBoxed` dispatches to the
    /// payload's own impl.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }
}

/// Declare a field-visibility table for a struct and derive its
/// [`Redact`] implementation from it.
///
/// Exposed fields are kept (recursing through their own `Redact`
/// implementation); hidden fields are reset to their default. The
/// expansion uses a struct literal, so forgetting a field fails to
/// compile. Generic types need a hand-written implementation.
///
/// ```
/// use replyfmt::redact_fields;
///
/// #[derive(Default)]
/// struct Session {
///     user: String,
///     token: String,
/// }
///
/// redact_fields!(Session { expose: [user], hide: [token] });
/// ```
#[macro_export]
macro_rules! redact_fields {
    ($ty:ty { expose: [$($show:ident),* $(,)?], hide: [$($hide:ident),* $(,)?] $(,)? }) => {
        impl $crate::redact::Redact for $ty {
            fn redacted(&self) -> Self {
                Self {
                    $($show: $crate::redact::Redact::redacted(&self.$show),)*
                    $($hide: ::std::default::Default::default(),)*
                }
            }
        }
    };
}

macro_rules! impl_copy_verbatim {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Redact for $ty {
                fn redacted(&self) -> Self {
                    *self
                }
            }
        )*
    };
}

impl_copy_verbatim!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, &str,
);

impl Redact for String {
    fn redacted(&self) -> Self {
        self.clone()
    }
}

impl<T: Redact> Redact for Option<T> {
    fn redacted(&self) -> Self {
        self.as_ref().map(Redact::redacted)
    }
}

impl<T: Redact> Redact for Vec<T> {
    fn redacted(&self) -> Self {
        self.iter().map(Redact::redacted).collect()
    }
}

impl<T: Redact> Redact for Box<T> {
    fn redacted(&self) -> Self {
        Box::new((**self).redacted())
    }
}

impl<K: Clone + Eq + Hash, V: Redact> Redact for HashMap<K, V> {
    fn redacted(&self) -> Self {
        self.iter().map(|(k, v)| (k.clone(), v.redacted())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Session {
        user: String,
        token: String,
        attempts: u32,
    }

    redact_fields!(Session { expose: [user, attempts], hide: [token] });

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Account {
        name: String,
        session: Session,
    }

    redact_fields!(Account { expose: [name, session], hide: [] });

    #[test]
    fn test_hidden_field_is_blanked() {
        let session = Session {
            user: "alice".to_string(),
            token: "tok-123".to_string(),
            attempts: 2,
        };
        let visible = session.redacted();
        assert_eq!(visible.user, "alice");
        assert_eq!(visible.attempts, 2);
        assert_eq!(visible.token, "");
    }

    #[test]
    fn test_exposed_struct_field_recurses() {
        let account = Account {
            name: "acme".to_string(),
            session: Session {
                user: "alice".to_string(),
                token: "tok-123".to_string(),
                attempts: 0,
            },
        };
        let visible = account.redacted();
        assert_eq!(visible.name, "acme");
        assert_eq!(visible.session.user, "alice");
        assert_eq!(visible.session.token, "");
    }

    #[test]
    fn test_scalars_copy_verbatim() {
        assert_eq!(42u32.redacted(), 42);
        assert_eq!(true.redacted(), true);
        assert_eq!("plain".redacted(), "plain");
        assert_eq!("plain".to_string().redacted(), "plain");
    }

    #[test]
    fn test_option_and_vec_redact_contents() {
        let sessions = vec![
            Session {
                user: "a".to_string(),
                token: "t1".to_string(),
                attempts: 0,
            },
            Session {
                user: "b".to_string(),
                token: "t2".to_string(),
                attempts: 0,
            },
        ];
        let visible = sessions.redacted();
        assert!(visible.iter().all(|s| s.token.is_empty()));
        assert_eq!(visible[1].user, "b");

        let maybe = Some(sessions[0].clone());
        assert_eq!(maybe.redacted().unwrap().token, "");
        assert_eq!(None::<Session>.redacted(), None);
    }

    #[test]
    fn test_boxed_field_redacts_inner_value() {
        let boxed = Box::new(Session {
            user: "alice".to_string(),
            token: "tok-123".to_string(),
            attempts: 1,
        });
        let visible = boxed.redacted();
        assert_eq!(visible.user, "alice");
        assert_eq!(visible.token, "");
    }

    #[test]
    fn test_map_values_redact() {
        let mut by_user = HashMap::new();
        by_user.insert(
            "alice".to_string(),
            Session {
                user: "alice".to_string(),
                token: "tok-123".to_string(),
                attempts: 0,
            },
        );
        let visible = by_user.redacted();
        assert_eq!(visible["alice"].token, "");
        assert_eq!(visible["alice"].user, "alice");
    }

    #[test]
    fn test_dyn_payload_honors_concrete_visibility() {
        // The dynamic value must redact through its concrete type's table,
        // not whatever the container knows statically.
        let payload: Box<dyn RedactBoxed> = Box::new(Session {
            user: "alice".to_string(),
            token: "tok-123".to_string(),
            attempts: 3,
        });
        let visible = payload.redacted();
        let session = visible
            .downcast_ref::<Session>()
            .expect("concrete type survives redaction");
        assert_eq!(session.user, "alice");
        assert_eq!(session.attempts, 3);
        assert_eq!(session.token, "");
    }

    #[test]
    fn test_downcast_ref_reaches_payload_not_box() {
        let payload: Box<dyn RedactBoxed> = Box::new(Session::default());
        // A box receiver satisfies the blanket impl itself, so as_any
        // there reports the box; the inherent helper must reach the
        // contained value.
        let through_box = payload.as_any();
        assert!(through_box.downcast_ref::<Box<dyn RedactBoxed>>().is_some());
        assert!(through_box.downcast_ref::<Session>().is_none());
        assert!(payload.downcast_ref::<Session>().is_some());
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Tagged<T> {
        label: String,
        value: T,
    }

    impl<T: Redact> Redact for Tagged<T> {
        fn redacted(&self) -> Self {
            Self {
                label: self.label.redacted(),
                value: self.value.redacted(),
            }
        }
    }

    #[test]
    fn test_generic_wrapper_redacts_inner_type() {
        let tagged = Tagged {
            label: "current".to_string(),
            value: Session {
                user: "alice".to_string(),
                token: "tok-123".to_string(),
                attempts: 0,
            },
        };
        let visible = tagged.redacted();
        assert_eq!(visible.label, "current");
        assert_eq!(visible.value.token, "");
    }
}
