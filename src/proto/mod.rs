//! ONNX Protocol Buffer types
//!
//! A hand-maintained subset of the ONNX message definitions, limited to the
//! fields the visualizer reads. Field tags match `onnx.proto`, so these types
//! decode real model files from the wire without build-time codegen.
//! Extension methods are provided in the `extensions` submodule.

/// Minimal ONNX protobuf message definitions
#[allow(missing_docs)]
pub mod onnx {
    /// Model container: metadata plus the top-level graph.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ModelProto {
        #[prost(int64, tag = "1")]
        pub ir_version: i64,
        #[prost(string, tag = "2")]
        pub producer_name: ::prost::alloc::string::String,
        #[prost(string, tag = "3")]
        pub producer_version: ::prost::alloc::string::String,
        #[prost(string, tag = "4")]
        pub domain: ::prost::alloc::string::String,
        #[prost(int64, tag = "5")]
        pub model_version: i64,
        #[prost(string, tag = "6")]
        pub doc_string: ::prost::alloc::string::String,
        #[prost(message, optional, tag = "7")]
        pub graph: ::core::option::Option<GraphProto>,
        #[prost(message, repeated, tag = "8")]
        pub opset_import: ::prost::alloc::vec::Vec<OperatorSetIdProto>,
    }

    /// Opset declaration: domain plus version.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct OperatorSetIdProto {
        #[prost(string, tag = "1")]
        pub domain: ::prost::alloc::string::String,
        #[prost(int64, tag = "2")]
        pub version: i64,
    }

    /// A computation graph: operators plus declared tensors.
    ///
    /// Nested control-flow graphs (carried by `GRAPH`-typed attributes) use
    /// this same message, so graph-processing code recurses uniformly.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct GraphProto {
        #[prost(message, repeated, tag = "1")]
        pub node: ::prost::alloc::vec::Vec<NodeProto>,
        #[prost(string, tag = "2")]
        pub name: ::prost::alloc::string::String,
        #[prost(message, repeated, tag = "5")]
        pub initializer: ::prost::alloc::vec::Vec<TensorProto>,
        #[prost(string, tag = "10")]
        pub doc_string: ::prost::alloc::string::String,
        #[prost(message, repeated, tag = "11")]
        pub input: ::prost::alloc::vec::Vec<ValueInfoProto>,
        #[prost(message, repeated, tag = "12")]
        pub output: ::prost::alloc::vec::Vec<ValueInfoProto>,
        #[prost(message, repeated, tag = "13")]
        pub value_info: ::prost::alloc::vec::Vec<ValueInfoProto>,
    }

    /// One computation step.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct NodeProto {
        #[prost(string, repeated, tag = "1")]
        pub input: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
        #[prost(string, repeated, tag = "2")]
        pub output: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
        #[prost(string, tag = "3")]
        pub name: ::prost::alloc::string::String,
        #[prost(string, tag = "4")]
        pub op_type: ::prost::alloc::string::String,
        #[prost(message, repeated, tag = "5")]
        pub attribute: ::prost::alloc::vec::Vec<AttributeProto>,
        #[prost(string, tag = "6")]
        pub doc_string: ::prost::alloc::string::String,
        #[prost(string, tag = "7")]
        pub domain: ::prost::alloc::string::String,
    }

    /// Named attribute. Exactly one value field is meaningful, selected by
    /// `type`; `g`/`graphs` carry nested control-flow graphs.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct AttributeProto {
        #[prost(string, tag = "1")]
        pub name: ::prost::alloc::string::String,
        #[prost(float, tag = "2")]
        pub f: f32,
        #[prost(int64, tag = "3")]
        pub i: i64,
        #[prost(bytes = "vec", tag = "4")]
        pub s: ::prost::alloc::vec::Vec<u8>,
        #[prost(message, optional, tag = "5")]
        pub t: ::core::option::Option<TensorProto>,
        #[prost(message, optional, tag = "6")]
        pub g: ::core::option::Option<GraphProto>,
        #[prost(float, repeated, tag = "7")]
        pub floats: ::prost::alloc::vec::Vec<f32>,
        #[prost(int64, repeated, tag = "8")]
        pub ints: ::prost::alloc::vec::Vec<i64>,
        #[prost(bytes = "vec", repeated, tag = "9")]
        pub strings: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
        #[prost(message, repeated, tag = "10")]
        pub tensors: ::prost::alloc::vec::Vec<TensorProto>,
        #[prost(message, repeated, tag = "11")]
        pub graphs: ::prost::alloc::vec::Vec<GraphProto>,
        #[prost(enumeration = "attribute_proto::AttributeType", tag = "20")]
        pub r#type: i32,
    }

    /// Nested types for [`AttributeProto`]
    pub mod attribute_proto {
        /// Discriminant for which attribute value field is set.
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
        )]
        #[repr(i32)]
        pub enum AttributeType {
            Undefined = 0,
            Float = 1,
            Int = 2,
            String = 3,
            Tensor = 4,
            Graph = 5,
            Floats = 6,
            Ints = 7,
            Strings = 8,
            Tensors = 9,
            Graphs = 10,
        }
    }

    /// Constant tensor. Only name and dims matter to the visualizer; the data
    /// fields are declared for wire compatibility.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TensorProto {
        #[prost(int64, repeated, tag = "1")]
        pub dims: ::prost::alloc::vec::Vec<i64>,
        #[prost(int32, tag = "2")]
        pub data_type: i32,
        #[prost(float, repeated, tag = "4")]
        pub float_data: ::prost::alloc::vec::Vec<f32>,
        #[prost(int64, repeated, tag = "7")]
        pub int64_data: ::prost::alloc::vec::Vec<i64>,
        #[prost(string, tag = "8")]
        pub name: ::prost::alloc::string::String,
        #[prost(bytes = "vec", tag = "9")]
        pub raw_data: ::prost::alloc::vec::Vec<u8>,
    }

    /// Declared tensor: name plus (optional) type and shape.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ValueInfoProto {
        #[prost(string, tag = "1")]
        pub name: ::prost::alloc::string::String,
        #[prost(message, optional, tag = "2")]
        pub r#type: ::core::option::Option<TypeProto>,
        #[prost(string, tag = "3")]
        pub doc_string: ::prost::alloc::string::String,
    }

    /// Type wrapper; only tensor types are modeled.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TypeProto {
        #[prost(oneof = "type_proto::Value", tags = "1")]
        pub value: ::core::option::Option<type_proto::Value>,
    }

    /// Nested types for [`TypeProto`]
    pub mod type_proto {
        /// Tensor type: element type plus shape.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Tensor {
            #[prost(int32, tag = "1")]
            pub elem_type: i32,
            #[prost(message, optional, tag = "2")]
            pub shape: ::core::option::Option<super::TensorShapeProto>,
        }

        /// Type variants (only `TensorType` is carried).
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Value {
            #[prost(message, tag = "1")]
            TensorType(Tensor),
        }
    }

    /// Shape: ordered dimensions, each static or symbolic.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TensorShapeProto {
        #[prost(message, repeated, tag = "1")]
        pub dim: ::prost::alloc::vec::Vec<tensor_shape_proto::Dimension>,
    }

    /// Nested types for [`TensorShapeProto`]
    pub mod tensor_shape_proto {
        /// One dimension of a tensor shape.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Dimension {
            #[prost(oneof = "dimension::Value", tags = "1, 2")]
            pub value: ::core::option::Option<dimension::Value>,
            #[prost(string, tag = "3")]
            pub denotation: ::prost::alloc::string::String,
        }

        /// Nested types for [`Dimension`]
        pub mod dimension {
            /// Static or symbolic dimension value.
            #[derive(Clone, PartialEq, ::prost::Oneof)]
            pub enum Value {
                #[prost(int64, tag = "1")]
                DimValue(i64),
                #[prost(string, tag = "2")]
                DimParam(::prost::alloc::string::String),
            }
        }
    }
}

// Re-export commonly used types at module level
pub use onnx::{
    AttributeProto, GraphProto, ModelProto, NodeProto, OperatorSetIdProto, TensorProto,
    TensorShapeProto, TypeProto, ValueInfoProto,
};

// Re-export submodules for nested types
pub use onnx::attribute_proto;
pub use onnx::tensor_shape_proto;
pub use onnx::type_proto;

/// Extension methods for ONNX protobuf types
pub mod extensions;
