//! Demonstration route tree served by the default binary.

use crate::routing::DescribedRouter;

async fn hello_world() -> &'static str {
    "Hello world!"
}

/// Flat routes at the root, a nested `/route` group with its own
/// `/test` group, and a mounted `/test2` sub-router.
pub fn demo_routes() -> DescribedRouter {
    let test = DescribedRouter::new()
        .get("/hello/{id}", hello_world)
        .post("/", hello_world);

    let test2 = DescribedRouter::new().get("/inner", hello_world);

    let route = DescribedRouter::new()
        .get("/get", hello_world)
        .post("/post", hello_world)
        .put("/put", hello_world)
        .patch("/patch", hello_world)
        .delete("/delete", hello_world)
        .nest("/test", test)
        .mount("/test2", test2);

    DescribedRouter::new()
        .get("/get", hello_world)
        .post("/post", hello_world)
        .put("/put", hello_world)
        .patch("/patch", hello_world)
        .delete("/delete", hello_world)
        .mount("/route", route)
}
