use tonic_build::manual::{Builder, Method, Service};

// Message types are hand-written prost structs in `src/proto.rs`; only the
// service stubs are generated here, so no protoc is needed at build time.
fn unary(name: &str, route_name: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route_name)
        .input_type(format!("crate::proto::{}", input))
        .output_type(format!("crate::proto::{}", output))
        .codec_path("tonic_prost::ProstCodec")
        .build()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let service = Service::builder()
        .name("FacilityService")
        .package("facility")
        .method(unary(
            "create_facility",
            "CreateFacility",
            "CreateFacilityRequest",
            "FacilityResponse",
        ))
        .method(unary(
            "get_facility",
            "GetFacility",
            "GetFacilityRequest",
            "FacilityDetailsResponse",
        ))
        .method(unary(
            "update_facility",
            "UpdateFacility",
            "UpdateFacilityRequest",
            "FacilityResponse",
        ))
        .method(unary(
            "delete_facility",
            "DeleteFacility",
            "DeleteFacilityRequest",
            "DeleteFacilityResponse",
        ))
        .method(unary(
            "add_available_time",
            "AddAvailableTime",
            "AddAvailableTimeRequest",
            "FacilityDetailsResponse",
        ))
        .method(unary(
            "remove_available_time",
            "RemoveAvailableTime",
            "RemoveAvailableTimeRequest",
            "FacilityDetailsResponse",
        ))
        .build();

    Builder::new().compile(&[service]);
}
