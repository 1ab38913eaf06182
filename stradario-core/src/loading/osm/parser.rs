//! Streaming decoder for `.osm` XML extracts
//!
//! Only `node` and `way` elements matter here; relations, bounds and the
//! rest of the document are skipped. A record missing a required
//! attribute fails the whole parse, the caller decides what to do with
//! the file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::graph::RawWay;
use crate::model::nodes::RawNode;
use crate::{Error, Result};

/// Decode one extract into raw node and way records, single pass.
pub fn parse_osm_xml(path: &Path) -> Result<(Vec<RawNode>, Vec<RawWay>)> {
    let file = File::open(path)?;
    let mut reader = Reader::from_reader(BufReader::new(file));

    let mut nodes: Vec<RawNode> = Vec::new();
    let mut ways: Vec<RawWay> = Vec::new();
    let mut current_way: Option<RawWay> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::Start(event) => {
                handle_element(&event, &mut nodes, &mut ways, &mut current_way, false)?;
            }
            Event::Empty(event) => {
                handle_element(&event, &mut nodes, &mut ways, &mut current_way, true)?;
            }
            Event::End(event) => {
                if event.name().as_ref() == b"way" {
                    if let Some(way) = current_way.take() {
                        ways.push(way);
                    }
                }
            }
            _ => {}
        }
        buf.clear();
    }

    Ok((nodes, ways))
}

fn handle_element(
    event: &BytesStart<'_>,
    nodes: &mut Vec<RawNode>,
    ways: &mut Vec<RawWay>,
    current_way: &mut Option<RawWay>,
    self_closing: bool,
) -> Result<()> {
    match event.name().as_ref() {
        b"node" => {
            nodes.push(RawNode {
                id: parse_number(&required_attr(event, b"id", "node", "id")?, "node id")?,
                lat: parse_number(&required_attr(event, b"lat", "node", "lat")?, "node lat")?,
                lon: parse_number(&required_attr(event, b"lon", "node", "lon")?, "node lon")?,
            });
        }
        b"way" => {
            let way = RawWay {
                id: parse_number(&required_attr(event, b"id", "way", "id")?, "way id")?,
                node_refs: Vec::new(),
                tags: Vec::new(),
            };
            if self_closing {
                ways.push(way);
            } else {
                *current_way = Some(way);
            }
        }
        b"nd" => {
            if let Some(way) = current_way.as_mut() {
                let reference = required_attr(event, b"ref", "nd", "ref")?;
                way.node_refs.push(parse_number(&reference, "nd ref")?);
            }
        }
        b"tag" => {
            if let Some(way) = current_way.as_mut() {
                let key = required_attr(event, b"k", "tag", "k")?;
                let value = required_attr(event, b"v", "tag", "v")?;
                way.tags.push((key, value));
            }
        }
        _ => {}
    }
    Ok(())
}

fn required_attr(
    event: &BytesStart<'_>,
    key: &[u8],
    element: &'static str,
    attribute: &'static str,
) -> Result<String> {
    for attr in event.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(attr.unescape_value()?.into_owned());
        }
    }
    Err(Error::MalformedRecord { element, attribute })
}

fn parse_number<T: FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::InvalidData(format!("unparseable {what} `{value}`")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse_str(xml: &str) -> Result<(Vec<RawNode>, Vec<RawWay>)> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("extract.osm");
        std::fs::write(&path, xml).unwrap();
        parse_osm_xml(&path)
    }

    const SAMPLE: &str = r#"<?xml version='1.0' encoding='UTF-8'?>
<osm version="0.6" generator="test">
  <bounds minlat="0" minlon="0" maxlat="2" maxlon="2"/>
  <node id="1" lat="0.0" lon="0.0"/>
  <node id="2" lat="0.5" lon="1.25"/>
  <way id="10">
    <nd ref="1"/>
    <nd ref="2"/>
    <tag k="highway" v="residential"/>
    <tag k="name" v="Via Roma"/>
  </way>
  <relation id="5"/>
</osm>
"#;

    #[test]
    fn decodes_nodes_and_ways() {
        let (nodes, ways) = parse_str(SAMPLE).unwrap();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].id, 2);
        assert_eq!(nodes[1].lat, 0.5);
        assert_eq!(nodes[1].lon, 1.25);

        assert_eq!(ways.len(), 1);
        assert_eq!(ways[0].id, 10);
        assert_eq!(ways[0].node_refs, vec![1, 2]);
        assert_eq!(
            ways[0].tags,
            vec![
                ("highway".to_string(), "residential".to_string()),
                ("name".to_string(), "Via Roma".to_string()),
            ]
        );
    }

    #[test]
    fn missing_node_coordinate_is_fatal() {
        let result = parse_str(r#"<osm><node id="1" lat="0.0"/></osm>"#);
        assert!(matches!(
            result,
            Err(Error::MalformedRecord {
                element: "node",
                attribute: "lon",
            })
        ));
    }

    #[test]
    fn missing_nd_ref_is_fatal() {
        let result = parse_str(r#"<osm><way id="10"><nd/></way></osm>"#);
        assert!(matches!(
            result,
            Err(Error::MalformedRecord {
                element: "nd",
                attribute: "ref",
            })
        ));
    }

    #[test]
    fn unparseable_id_is_fatal() {
        let result = parse_str(r#"<osm><node id="abc" lat="0" lon="0"/></osm>"#);
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn node_tags_are_ignored() {
        let (nodes, ways) = parse_str(
            r#"<osm><node id="1" lat="0" lon="0"><tag k="amenity" v="bench"/></node></osm>"#,
        )
        .unwrap();
        assert_eq!(nodes.len(), 1);
        assert!(ways.is_empty());
    }
}
