use volley_serde::{BitReader, BitWrite, BitWriter, Serde};

use crate::{
    call::{error::EnvelopeError, receiver_policy::ReceiverPolicy},
    function::{codec::CodecTable, param_type::ParamType, param_value::ParamValue},
    types::{FunctionId, ObjectRef},
};

/// Everything in an envelope ahead of the parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvelopeHeader {
    pub owner: ObjectRef,
    pub function_id: FunctionId,
    /// Present only on envelopes a client sends to the server
    pub receivers: Option<ReceiverPolicy>,
}

impl EnvelopeHeader {
    pub fn new(
        owner: ObjectRef,
        function_id: FunctionId,
        receivers: Option<ReceiverPolicy>,
    ) -> Self {
        Self {
            owner,
            function_id,
            receivers,
        }
    }

    pub fn write(&self, writer: &mut dyn BitWrite) {
        self.owner.ser(writer);
        self.function_id.ser(writer);
        if let Some(receivers) = &self.receivers {
            receivers.ser(writer);
        }
    }

    /// `with_routing` must match what the sender wrote: true when reading on
    /// the server, false on a client
    pub fn read(reader: &mut BitReader, with_routing: bool) -> Result<Self, EnvelopeError> {
        let owner = ObjectRef::de(reader).map_err(|_| EnvelopeError::Header)?;
        let function_id = FunctionId::de(reader).map_err(|_| EnvelopeError::Header)?;
        let receivers = if with_routing {
            Some(ReceiverPolicy::read(reader)?)
        } else {
            None
        };

        Ok(Self {
            owner,
            function_id,
            receivers,
        })
    }

    pub fn bit_length(&self) -> u32 {
        let mut output = self.owner.bit_length() + self.function_id.bit_length();
        if let Some(receivers) = &self.receivers {
            output += receivers.bit_length();
        }
        output
    }
}

/// A decoded call: header plus parameter values in declared order.
///
/// Parameters carry no length prefix or type tag, so both directions need the
/// function's declared parameter types.
#[derive(Clone, Debug, PartialEq)]
pub struct InvocationEnvelope {
    pub header: EnvelopeHeader,
    pub params: Vec<ParamValue>,
}

impl InvocationEnvelope {
    pub fn new(header: EnvelopeHeader, params: Vec<ParamValue>) -> Self {
        Self { header, params }
    }

    /// Writes a header and parameter values. Values are checked before the
    /// header goes out, so on failure `writer` is untouched.
    pub fn write(
        header: &EnvelopeHeader,
        codecs: &CodecTable,
        types: &[ParamType],
        values: &[ParamValue],
        writer: &mut dyn BitWrite,
    ) -> Result<(), EnvelopeError> {
        codecs.check(values, types)?;
        header.write(writer);
        codecs.encode(values, types, writer)?;
        Ok(())
    }

    /// Encodes a header and parameter values into one packet payload
    pub fn encode(
        header: &EnvelopeHeader,
        codecs: &CodecTable,
        types: &[ParamType],
        values: &[ParamValue],
    ) -> Result<Vec<u8>, EnvelopeError> {
        let mut writer = BitWriter::new();
        Self::write(header, codecs, types, values, &mut writer)?;
        Ok(writer.to_bytes())
    }

    pub fn to_bytes(
        &self,
        codecs: &CodecTable,
        types: &[ParamType],
    ) -> Result<Vec<u8>, EnvelopeError> {
        Self::encode(&self.header, codecs, types, &self.params)
    }

    /// Reads a whole envelope whose function is known to take `types`
    pub fn read(
        reader: &mut BitReader,
        codecs: &CodecTable,
        types: &[ParamType],
        with_routing: bool,
    ) -> Result<Self, EnvelopeError> {
        let header = EnvelopeHeader::read(reader, with_routing)?;
        let params = codecs.decode(reader, types)?;
        Ok(Self { header, params })
    }
}
