use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use pair_color_code::{Color, Palette};
use pair_color_code::manual::{Format, ManualOptions};

type Err = Box<dyn Error>;

fn css_string(c: &Color) -> String {
    let rgb = c.rgb();
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

fn table_of_colors(fh: &mut impl Write, palette: Palette,
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in palette.colors() {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 css_string(&c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for c in palette.colors() {
        writeln!(fh, "  <td style=\"width: {width}px; text-align: center\">\
                      {}</td>", c.name())?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let title = "Color Coding Reference Manual";

    let mut fh = BufWriter::new(File::create("manual.txt")?);
    write!(fh, "{}", ManualOptions::new().title(title).render())?;

    let mut fh = BufWriter::new(File::create("manual.html")?);
    write!(fh, "{}",
           ManualOptions::new().title(title).format(Format::Html).render())?;

    let mut fh = BufWriter::new(File::create("palettes.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>pair-color-code: palettes ({})</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    writeln!(fh, "<h3>Major colors</h3>")?;
    table_of_colors(&mut fh, Palette::major(), 60, "changes every 5 pairs")?;
    writeln!(fh, "<h3>Minor colors</h3>")?;
    table_of_colors(&mut fh, Palette::minor(), 60, "cycles within each group")?;
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
