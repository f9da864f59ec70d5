use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use glam::Vec4;
use lighting_core::gpu::registers::{
    light_block, LIGHTING_AMBIENT, LIGHTING_CONFIG0, LIGHTING_CONFIG1, LIGHTING_ENABLE0,
    LIGHTING_ENABLE1, LIGHTING_LIGHT_PERMUTATION, LIGHTING_LUTINPUT_ABS, LIGHTING_LUTINPUT_SCALE,
    LIGHTING_LUTINPUT_SELECT, LIGHTING_LUT_DATA0, LIGHTING_LUT_INDEX, LIGHTING_NUM_LIGHTS,
    LIGHT_UNITS,
};
use lighting_core::gpu::Packet;
use lighting_core::{CommandList, RenderContext};

use crate::error::HostError;
use crate::scene::Scene;

/// Words of command list space per pass. Covers a full resend of every
/// table and light block.
pub const PASS_CAPACITY: usize = 8192;

/// How each pass is written out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Raw command list words, one per line.
    Hex,
    /// Decoded packets with register names.
    Packets,
    /// Per-pass word and packet counts only.
    Summary,
}

/// Options for a dump run.
#[derive(Clone, Copy, Debug)]
pub struct DumpConfig {
    pub scene: Scene,
    pub passes: usize,
    /// Force a full resend before every pass after the first.
    pub cascade: bool,
    /// Move light 0 between passes.
    pub animate: bool,
    pub format: OutputFormat,
}

/// Size of one encoded pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassReport {
    pub words: usize,
    pub packets: usize,
}

/// Register name for display, if the id belongs to the lighting unit.
pub fn register_name(id: u16) -> Option<String> {
    let name = match id {
        LIGHTING_ENABLE0 => "LIGHTING_ENABLE0",
        LIGHTING_AMBIENT => "LIGHTING_AMBIENT",
        LIGHTING_NUM_LIGHTS => "LIGHTING_NUM_LIGHTS",
        LIGHTING_CONFIG0 => "LIGHTING_CONFIG0",
        LIGHTING_CONFIG1 => "LIGHTING_CONFIG1",
        LIGHTING_LUT_INDEX => "LIGHTING_LUT_INDEX",
        LIGHTING_ENABLE1 => "LIGHTING_ENABLE1",
        LIGHTING_LUT_DATA0 => "LIGHTING_LUT_DATA0",
        LIGHTING_LUTINPUT_ABS => "LIGHTING_LUTINPUT_ABS",
        LIGHTING_LUTINPUT_SELECT => "LIGHTING_LUTINPUT_SELECT",
        LIGHTING_LUTINPUT_SCALE => "LIGHTING_LUTINPUT_SCALE",
        LIGHTING_LIGHT_PERMUTATION => "LIGHTING_LIGHT_PERMUTATION",
        _ => {
            return (0..LIGHT_UNITS)
                .find(|&unit| light_block(unit) == id)
                .map(|unit| format!("LIGHT{unit}_SPECULAR0"));
        }
    };
    Some(name.to_string())
}

fn write_packet(out: &mut impl Write, packet: &Packet<'_>) -> std::io::Result<()> {
    let name = register_name(packet.register).unwrap_or_else(|| format!("{:#06x}", packet.register));
    let kind = if packet.incremental { "seq" } else { "fix" };
    write!(out, "  {name:<28} {kind} x{:<3}", packet.params.len())?;
    for (i, word) in packet.params.iter().enumerate() {
        if i == 8 {
            write!(out, " ...")?;
            break;
        }
        write!(out, " {word:08x}")?;
    }
    writeln!(out)
}

/// Build `config.scene`, run the requested passes through a render context,
/// and write each pass's command list to `out`.
pub fn run_passes(config: &DumpConfig, out: &mut impl Write) -> Result<Vec<PassReport>, HostError> {
    if config.passes == 0 {
        return Err(HostError::Config("at least one pass is required".to_string()));
    }

    let setup = config.scene.build();
    let luts = setup.luts;
    let env = Rc::new(RefCell::new(setup.env));

    let mut ctx = RenderContext::new();
    ctx.activate();
    ctx.bind_light_env(Some(&env));

    let mut list = Box::new(CommandList::<PASS_CAPACITY>::new());
    let mut reports = Vec::with_capacity(config.passes);

    for pass in 0..config.passes {
        if pass > 0 {
            let mut env = env.borrow_mut();
            if config.cascade {
                env.mark_all_dirty();
            }
            if config.animate {
                let t = pass as f32 * 0.25;
                env.set_light_position(0, Vec4::new(t.cos() * 2.0, 1.0, t.sin() * 2.0, 1.0));
            }
        }

        list.clear();
        ctx.flush_lighting(&luts, &mut *list)
            .map_err(|source| HostError::Pass { pass, source })?;

        let report = PassReport {
            words: list.len(),
            packets: list.packets().count(),
        };
        log::info!(
            "pass {pass}: {} packets, {} words",
            report.packets,
            report.words
        );

        match config.format {
            OutputFormat::Hex => {
                writeln!(out, "# pass {pass}")?;
                for word in list.as_words() {
                    writeln!(out, "{word:08x}")?;
                }
            }
            OutputFormat::Packets => {
                writeln!(out, "# pass {pass}")?;
                for packet in list.packets() {
                    write_packet(out, &packet)?;
                }
            }
            OutputFormat::Summary => {
                writeln!(
                    out,
                    "pass {pass}: {} packets, {} words",
                    report.packets, report.words
                )?;
            }
        }
        reports.push(report);
    }

    Ok(reports)
}
