use bauwerk_geom::Vec3;

/// Nearest solid voxel along a ray: the voxel itself, the integer face
/// normal the ray entered through, and the exact entry point for
/// sub-grid fraction math.
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    pub bx: i32,
    pub by: i32,
    pub bz: i32,
    pub nx: i32,
    pub ny: i32,
    pub nz: i32,
    pub point: Vec3,
    pub distance: f32,
}

impl RayHit {
    #[inline]
    pub fn voxel(&self) -> (i32, i32, i32) {
        (self.bx, self.by, self.bz)
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        Vec3::new(self.nx as f32, self.ny as f32, self.nz as f32)
    }
}

#[inline]
fn inv_or_max(v: f32) -> f32 {
    if v.abs() < 1e-8 { f32::MAX } else { 1.0 / v.abs() }
}

/// DDA voxel walk. Voxel centers sit at integer coordinates, so cell
/// boundaries land on half-integers; `is_solid` is the host's occupancy
/// query. Returns the first solid voxel within `max_dist`.
pub fn raycast_first_hit<F>(
    origin: Vec3,
    dir: Vec3,
    max_dist: f32,
    mut is_solid: F,
) -> Option<RayHit>
where
    F: FnMut(i32, i32, i32) -> bool,
{
    let len = dir.length();
    if len < 1e-6 {
        return None;
    }
    let d = dir / len;

    // Shift by half a voxel so cell boundaries sit on integers.
    let sx = origin.x + 0.5;
    let sy = origin.y + 0.5;
    let sz = origin.z + 0.5;

    let mut vx = sx.floor() as i32;
    let mut vy = sy.floor() as i32;
    let mut vz = sz.floor() as i32;

    let stepx = if d.x > 0.0 {
        1
    } else if d.x < 0.0 {
        -1
    } else {
        0
    };
    let stepy = if d.y > 0.0 {
        1
    } else if d.y < 0.0 {
        -1
    } else {
        0
    };
    let stepz = if d.z > 0.0 {
        1
    } else if d.z < 0.0 {
        -1
    } else {
        0
    };

    let invx = inv_or_max(d.x);
    let invy = inv_or_max(d.y);
    let invz = inv_or_max(d.z);
    let tdx = if stepx == 0 { f32::MAX } else { invx };
    let tdy = if stepy == 0 { f32::MAX } else { invy };
    let tdz = if stepz == 0 { f32::MAX } else { invz };

    let fx = sx - sx.floor();
    let fy = sy - sy.floor();
    let fz = sz - sz.floor();
    let mut tmx = if stepx > 0 {
        (1.0 - fx) * invx
    } else if stepx < 0 {
        fx * invx
    } else {
        f32::MAX
    };
    let mut tmy = if stepy > 0 {
        (1.0 - fy) * invy
    } else if stepy < 0 {
        fy * invy
    } else {
        f32::MAX
    };
    let mut tmz = if stepz > 0 {
        (1.0 - fz) * invz
    } else if stepz < 0 {
        fz * invz
    } else {
        f32::MAX
    };

    let mut prevx = vx;
    let mut prevy = vy;
    let mut prevz = vz;
    let mut t = 0.0f32;

    for _ in 0..512 {
        if t > max_dist {
            break;
        }
        if is_solid(vx, vy, vz) {
            // Face normal from the step between prev and current voxel
            let dx = vx - prevx;
            let dy = vy - prevy;
            let dz = vz - prevz;
            let (mut nx, mut ny, mut nz) = (0, 0, 0);
            if dx == 1 {
                nx = -1;
            } else if dx == -1 {
                nx = 1;
            } else if dy == 1 {
                ny = -1;
            } else if dy == -1 {
                ny = 1;
            } else if dz == 1 {
                nz = -1;
            } else if dz == -1 {
                nz = 1;
            }
            return Some(RayHit {
                bx: vx,
                by: vy,
                bz: vz,
                nx,
                ny,
                nz,
                point: origin + d * t,
                distance: t,
            });
        }
        prevx = vx;
        prevy = vy;
        prevz = vz;
        // Step through smallest tMax
        if tmx < tmy {
            if tmx < tmz {
                vx += stepx;
                t = tmx;
                tmx += tdx;
            } else {
                vz += stepz;
                t = tmz;
                tmz += tdz;
            }
        } else if tmy < tmz {
            vy += stepy;
            t = tmy;
            tmy += tdy;
        } else {
            vz += stepz;
            t = tmz;
            tmz += tdz;
        }
    }
    None
}
