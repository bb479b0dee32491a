//! Declarative parameter descriptors.
//!
//! Applications expose their parameters as plain data so a hosting layer
//! (CLI, service, GUI) can present and bind them without instantiating the
//! processing pipeline. The descriptors mirror the registration contract of
//! classic raster-processing frameworks: keyed parameters with labels,
//! defaults and nested choice variants.

/// The pixel type an output image parameter defaults to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelType {
    /// 32-bit floating point samples.
    Float,
}

/// The kind of a parameter, with its defaults and constraints.
#[derive(Debug, Clone)]
pub enum ParameterKind {
    /// An input image path or handle, bound by the hosting layer.
    InputImage,
    /// An output image path or handle with a default sample type.
    OutputImage {
        /// The default pixel type of the written output.
        default_pixel_type: PixelType,
    },
    /// An integer parameter.
    Int {
        /// The value used when the parameter is not set.
        default: i64,
        /// The smallest accepted value, if constrained.
        minimum: Option<i64>,
    },
    /// A closed choice between named variants, each possibly carrying
    /// sub-parameters of its own.
    Choice {
        /// The selectable variants, first one is the default.
        variants: Vec<ChoiceVariant>,
    },
}

/// One selectable variant of a choice parameter.
#[derive(Debug, Clone)]
pub struct ChoiceVariant {
    /// The machine-readable key of the variant.
    pub key: &'static str,
    /// The human-readable label of the variant.
    pub label: &'static str,
    /// Sub-parameters only meaningful when this variant is selected.
    pub parameters: Vec<ParameterDescriptor>,
}

/// A single declared parameter of an application.
#[derive(Debug, Clone)]
pub struct ParameterDescriptor {
    /// The machine-readable key of the parameter.
    pub key: &'static str,
    /// The human-readable label of the parameter.
    pub label: &'static str,
    /// A one-line description for the hosting layer's help output.
    pub description: &'static str,
    /// The kind, defaults and constraints of the parameter.
    pub kind: ParameterKind,
}

impl ParameterDescriptor {
    /// Look up a nested sub-parameter of a choice variant by its dotted key,
    /// e.g. `"structype.ball.xradius"`.
    pub fn find<'a>(
        descriptors: &'a [ParameterDescriptor],
        dotted_key: &str,
    ) -> Option<&'a ParameterDescriptor> {
        let (head, rest) = match dotted_key.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (dotted_key, None),
        };

        let descriptor = descriptors.iter().find(|d| d.key == head)?;
        let Some(rest) = rest else {
            return Some(descriptor);
        };

        let ParameterKind::Choice { variants } = &descriptor.kind else {
            return None;
        };
        let (variant_key, sub_key) = rest.split_once('.')?;
        let variant = variants.iter().find(|v| v.key == variant_key)?;
        Self::find(&variant.parameters, sub_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Vec<ParameterDescriptor> {
        vec![
            ParameterDescriptor {
                key: "in",
                label: "Input Image",
                description: "The input image to be filtered.",
                kind: ParameterKind::InputImage,
            },
            ParameterDescriptor {
                key: "structype",
                label: "Structuring Element Type",
                description: "Choice of the structuring element type",
                kind: ParameterKind::Choice {
                    variants: vec![ChoiceVariant {
                        key: "ball",
                        label: "Ball",
                        parameters: vec![ParameterDescriptor {
                            key: "xradius",
                            label: "X Radius",
                            description: "The structuring element x radius",
                            kind: ParameterKind::Int {
                                default: 5,
                                minimum: None,
                            },
                        }],
                    }],
                },
            },
        ]
    }

    #[test]
    fn test_find_top_level() {
        let schema = sample_schema();
        let descriptor = ParameterDescriptor::find(&schema, "in").unwrap();
        assert_eq!(descriptor.label, "Input Image");
    }

    #[test]
    fn test_find_nested() {
        let schema = sample_schema();
        let descriptor = ParameterDescriptor::find(&schema, "structype.ball.xradius").unwrap();
        assert!(matches!(
            descriptor.kind,
            ParameterKind::Int { default: 5, .. }
        ));
    }

    #[test]
    fn test_find_missing() {
        let schema = sample_schema();
        assert!(ParameterDescriptor::find(&schema, "structype.cross.xradius").is_none());
        assert!(ParameterDescriptor::find(&schema, "nope").is_none());
    }
}
