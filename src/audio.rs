use web_sys as web;

const BEEP_HZ: f32 = 800.0;
const BEEP_GAIN: f32 = 0.2;
const BEEP_FLOOR: f32 = 0.001; // exponential ramps cannot reach zero
const BEEP_SEC: f64 = 0.08;

/// Short sine blip played on every target hit.
pub struct HitSound {
    audio_ctx: web::AudioContext,
}

impl HitSound {
    pub fn new() -> Option<Self> {
        match web::AudioContext::new() {
            Ok(audio_ctx) => Some(Self { audio_ctx }),
            Err(e) => {
                log::error!("[audio] AudioContext error: {:?}", e);
                None
            }
        }
    }

    pub fn play(&self) {
        // Contexts start suspended until a user gesture; a hit is one.
        _ = self.audio_ctx.resume();
        let t0 = self.audio_ctx.current_time();

        let src = match web::OscillatorNode::new(&self.audio_ctx) {
            Ok(src) => src,
            Err(e) => {
                log::error!("[audio] OscillatorNode error: {:?}", e);
                return;
            }
        };
        let gain = match web::GainNode::new(&self.audio_ctx) {
            Ok(g) => g,
            Err(e) => {
                log::error!("[audio] GainNode error: {:?}", e);
                return;
            }
        };
        src.set_type(web::OscillatorType::Sine);
        src.frequency().set_value(BEEP_HZ);
        _ = gain.gain().set_value_at_time(BEEP_GAIN, t0);
        _ = gain
            .gain()
            .exponential_ramp_to_value_at_time(BEEP_FLOOR, t0 + BEEP_SEC);

        _ = src.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&self.audio_ctx.destination());
        _ = src.start_with_when(t0);
        _ = src.stop_with_when(t0 + BEEP_SEC);
    }
}
