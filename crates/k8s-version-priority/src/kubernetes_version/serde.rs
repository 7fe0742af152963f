use std::str::FromStr;

use serde::{Deserialize, Serialize, de::Visitor};

use crate::KubernetesVersion;

impl<'de> Deserialize<'de> for KubernetesVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct KubernetesVersionVisitor;

        impl Visitor<'_> for KubernetesVersionVisitor {
            type Value = KubernetesVersion;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "a valid Kubernetes API version")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                KubernetesVersion::from_str(v).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(KubernetesVersionVisitor)
    }
}

impl Serialize for KubernetesVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.full())
    }
}
