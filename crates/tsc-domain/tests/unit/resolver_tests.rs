//! Unit tests for the container lookup port

use std::collections::HashMap;
use std::sync::Arc;
use tsc_domain::{Error, Result, ServiceDescriptor, ServiceResolver};

/// Container holding a fixed set of string beans
struct StringBeans {
    beans: HashMap<String, Arc<String>>,
}

impl ServiceResolver for StringBeans {
    fn resolve<T>(&self, descriptor: &ServiceDescriptor) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let bean = self
            .beans
            .get(descriptor.name())
            .ok_or_else(|| Error::service_not_found(descriptor.name(), "unknown bean"))?;
        let any: Box<dyn std::any::Any> = Box::new(Arc::clone(bean));
        any.downcast::<Arc<T>>()
            .map(|b| *b)
            .map_err(|_| Error::service_type_mismatch::<T, _>(descriptor.name()))
    }
}

fn beans() -> StringBeans {
    let mut beans = HashMap::new();
    beans.insert("greeting".to_string(), Arc::new("hello".to_string()));
    StringBeans { beans }
}

#[test]
fn test_resolve_through_reference() {
    let container = beans();
    let by_ref = &container;
    let value: Arc<String> = by_ref.resolve(&"greeting".into()).expect("resolves");
    assert_eq!(value.as_str(), "hello");
}

#[test]
fn test_resolve_through_arc() {
    let container = Arc::new(beans());
    let value: Arc<String> = container.resolve(&"greeting".into()).expect("resolves");
    assert_eq!(value.as_str(), "hello");
}

#[test]
fn test_unknown_descriptor_is_not_found() {
    let err = beans()
        .resolve::<String>(&"missing".into())
        .expect_err("unknown descriptor");
    assert!(err.is_not_found());
}
