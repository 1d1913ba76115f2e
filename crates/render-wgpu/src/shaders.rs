/// WGSL shader for the displaced sphere.
///
/// The vertex stage pushes each vertex along its normal by a band of value
/// noise plus a concentric ring wave; the animated `scale` and `frequency`
/// uniforms make the surface breathe. The fragment stage mixes the two
/// material colors by displacement height and lights the result with six
/// directional lights.
pub const SPHERE_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    color1: vec4<f32>,
    color2: vec4<f32>,
    light_dirs: array<vec4<f32>, 6>,
    // x: uTime, y: scale, z: frequency, w: noiseScale
    params0: vec4<f32>,
    // x: ringScale
    params1: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_normal: vec3<f32>,
    @location(1) height: f32,
};

fn hash3(p: vec3<f32>) -> f32 {
    let h = dot(p, vec3<f32>(127.1, 311.7, 74.7));
    return fract(sin(h) * 43758.5453123);
}

fn value_noise(p: vec3<f32>) -> f32 {
    let i = floor(p);
    let f = fract(p);
    let u = f * f * (3.0 - 2.0 * f);

    let n000 = hash3(i + vec3<f32>(0.0, 0.0, 0.0));
    let n100 = hash3(i + vec3<f32>(1.0, 0.0, 0.0));
    let n010 = hash3(i + vec3<f32>(0.0, 1.0, 0.0));
    let n110 = hash3(i + vec3<f32>(1.0, 1.0, 0.0));
    let n001 = hash3(i + vec3<f32>(0.0, 0.0, 1.0));
    let n101 = hash3(i + vec3<f32>(1.0, 0.0, 1.0));
    let n011 = hash3(i + vec3<f32>(0.0, 1.0, 1.0));
    let n111 = hash3(i + vec3<f32>(1.0, 1.0, 1.0));

    let nx00 = mix(n000, n100, u.x);
    let nx10 = mix(n010, n110, u.x);
    let nx01 = mix(n001, n101, u.x);
    let nx11 = mix(n011, n111, u.x);
    let nxy0 = mix(nx00, nx10, u.y);
    let nxy1 = mix(nx01, nx11, u.y);
    return mix(nxy0, nxy1, u.z);
}

fn fbm(p: vec3<f32>) -> f32 {
    var value = 0.0;
    var amplitude = 0.5;
    var q = p;
    for (var i = 0; i < 4; i = i + 1) {
        value = value + amplitude * (value_noise(q) * 2.0 - 1.0);
        q = q * 2.0;
        amplitude = amplitude * 0.5;
    }
    return value;
}

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    let time = uniforms.params0.x;
    let scale = uniforms.params0.y;
    let frequency = uniforms.params0.z;
    let noise_scale = uniforms.params0.w;
    let ring_scale = uniforms.params1.x;

    let n = vertex.normal;
    let noise_h = fbm(n * frequency + vec3<f32>(time, time, time));
    let ring_h = sin(length(vertex.position.xz) * ring_scale - time * 2.0) * 0.5;
    let height = (noise_h * noise_scale * 0.02 + ring_h) * scale;

    let displaced = vertex.position + n * height;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(displaced, 1.0);
    out.world_normal = n;
    out.height = height;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    var lighting = 0.0;
    for (var i = 0; i < 6; i = i + 1) {
        let light = uniforms.light_dirs[i];
        lighting = lighting + max(dot(in.world_normal, -light.xyz), 0.0) * light.w;
    }
    lighting = clamp(lighting, 0.15, 1.0);

    let blend = clamp(in.height * 0.5 + 0.5, 0.0, 1.0);
    let albedo = mix(uniforms.color2.rgb, uniforms.color1.rgb, blend);
    return vec4<f32>(albedo * lighting, 1.0);
}
"#;
