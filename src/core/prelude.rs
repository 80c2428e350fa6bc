#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::{
        config::*,
        registry::{ComponentFactory, ComponentRegistry, NativeHandle},
        schema::{FieldMeta, FieldSchema},
    },
    util::{
        calc,
        colour::{Colour, ColourHsva},
        linalg,
        linalg::{Mat3x3, Mat4x4, Quat, Vec2, Vec2i, Vec3, Vec4},
    },
};
