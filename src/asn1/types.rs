//! ROS primitive type tables for ASN.1 generation

/// ASN.1 equivalent of a ROS primitive type, if the type is primitive
pub fn primitive_asn1_type(ros_type: &str) -> Option<&'static str> {
    let asn1 = match ros_type {
        "bool" => "T-Boolean",
        "int8" | "byte" => "T-Int8",
        "uint8" | "char" => "T-UInt8",
        "int16" => "T-Int16",
        "uint16" => "T-UInt16",
        "int32" => "T-Int32",
        "uint32" => "T-UInt32",
        "int64" => "T-Int64",
        "uint64" => "T-UInt64",
        "float32" => "T-Float",
        "float64" => "T-Double",
        "string" => "T-String",
        "time" => "Time",
        "duration" => "Duration",
        _ => return None,
    };
    Some(asn1)
}

/// ASN.1 library a primitive ASN.1 type is imported from
pub fn primitive_library(asn1_type: &str) -> &'static str {
    match asn1_type {
        "T-Boolean" | "T-Int8" | "T-UInt8" | "T-Int32" | "T-UInt32" => "TASTE-BasicTypes",
        "Time" | "Duration" => "Time-Types",
        // T-Int16, T-UInt16, T-Int64, T-UInt64, T-Float, T-Double, T-String
        _ => "TASTE-ExtendedTypes",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_mapping() {
        assert_eq!(primitive_asn1_type("uint32"), Some("T-UInt32"));
        assert_eq!(primitive_asn1_type("float64"), Some("T-Double"));
        assert_eq!(primitive_asn1_type("byte"), Some("T-Int8"));
        assert_eq!(primitive_asn1_type("geometry_msgs/Pose"), None);
    }

    #[test]
    fn test_primitive_libraries() {
        assert_eq!(primitive_library("T-Boolean"), "TASTE-BasicTypes");
        assert_eq!(primitive_library("T-String"), "TASTE-ExtendedTypes");
        assert_eq!(primitive_library("Duration"), "Time-Types");
    }
}
