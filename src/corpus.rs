//! Synthetic domain XML generation.
//!
//! Produces deterministic libvirt domain documents of varying size (disk, NIC,
//! host device and CPU feature counts differ per document) so the comparison can be
//! run without a dump of real domains. Every generated document decodes under both
//! schemas.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const OS_NAMES: &[&str] = &["fedora", "centos-stream", "ubuntu", "debian", "rhel", "windows"];
const CPU_FEATURES: &[&str] = &[
    "invtsc", "pcid", "spec-ctrl", "ssbd", "md-clear", "vmx", "x2apic", "hypervisor", "tsc_adjust",
    "arch-capabilities", "rdctl-no", "skip-l1dfl-vmentry",
];
const DISK_BUSES: &[&str] = &["virtio", "sata", "scsi"];
const NIC_MODELS: &[&str] = &["virtio-non-transitional", "e1000e", "virtio"];

/// Configuration for corpus generation.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Number of documents to write.
    pub count: u64,
    /// Random seed for deterministic generation.
    pub seed: u64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self { count: 16, seed: 42 }
    }
}

fn per_domain_seed(master_seed: u64, index: u64) -> u64 {
    master_seed
        .wrapping_add(index)
        .wrapping_mul(0x517cc1b727220a95)
}

/// File name of the `index`-th generated document.
pub fn file_name(index: u64) -> String {
    format!("domain_{index:04}.xml")
}

/// Generate the `index`-th document of the corpus for `seed`.
pub fn generate_domain(seed: u64, index: u64) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(per_domain_seed(seed, index));
    // Writing into a String cannot fail.
    let mut xml = String::with_capacity(8 * 1024);
    let _ = write_domain(&mut xml, &mut rng, index);
    xml
}

/// Write `config.count` documents into `dir`, creating it if needed.
pub fn write_corpus(dir: &Path, config: &GenerateConfig) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(config.count as usize);
    for index in 0..config.count {
        let path = dir.join(file_name(index));
        fs::write(&path, generate_domain(config.seed, index))?;
        written.push(path);
    }
    Ok(written)
}

fn pick<'a>(rng: &mut ChaCha8Rng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn uuid(rng: &mut ChaCha8Rng) -> String {
    let b: [u8; 16] = rng.gen();
    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7], b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]
    )
}

fn write_domain(x: &mut String, rng: &mut ChaCha8Rng, index: u64) -> std::fmt::Result {
    let name = format!("{}-{index:04}", pick(rng, OS_NAMES));
    let vm_uuid = uuid(rng);
    let vcpus: u32 = [1, 2, 4, 8, 16][rng.gen_range(0..5)];
    let memory_kib: u64 = rng.gen_range(1..=32u64) * 512 * 1024;

    writeln!(x, "<domain type='kvm' id='{}'>", rng.gen_range(1..500))?;
    writeln!(x, "  <name>{name}</name>")?;
    writeln!(x, "  <uuid>{vm_uuid}</uuid>")?;
    writeln!(x, "  <metadata>")?;
    writeln!(x, "    <kubevirt xmlns=\"http://kubevirt.io\">")?;
    writeln!(x, "      <uid>{}</uid>", uuid(rng))?;
    writeln!(x, "      <graceperiod>")?;
    writeln!(x, "        <deletionGracePeriodSeconds>{}</deletionGracePeriodSeconds>", rng.gen_range(0..=60))?;
    writeln!(x, "      </graceperiod>")?;
    writeln!(x, "    </kubevirt>")?;
    writeln!(x, "  </metadata>")?;
    writeln!(x, "  <memory unit='KiB'>{memory_kib}</memory>")?;
    writeln!(x, "  <currentMemory unit='KiB'>{memory_kib}</currentMemory>")?;
    if rng.gen_bool(0.3) {
        writeln!(x, "  <memoryBacking>")?;
        writeln!(x, "    <hugepages>")?;
        writeln!(x, "      <page size='2048' unit='KiB'/>")?;
        writeln!(x, "    </hugepages>")?;
        writeln!(x, "  </memoryBacking>")?;
    }
    writeln!(x, "  <vcpu placement='static'>{vcpus}</vcpu>")?;

    let dedicated = rng.gen_bool(0.4);
    if dedicated {
        writeln!(x, "  <iothreads>1</iothreads>")?;
        writeln!(x, "  <cputune>")?;
        for v in 0..vcpus {
            writeln!(x, "    <vcpupin vcpu='{v}' cpuset='{}'/>", v + 2)?;
        }
        writeln!(x, "    <emulatorpin cpuset='1'/>")?;
        writeln!(x, "  </cputune>")?;
    }

    writeln!(x, "  <resource>")?;
    writeln!(x, "    <partition>/machine</partition>")?;
    writeln!(x, "  </resource>")?;
    writeln!(x, "  <sysinfo type='smbios'>")?;
    writeln!(x, "    <system>")?;
    writeln!(x, "      <entry name='manufacturer'>KubeVirt</entry>")?;
    writeln!(x, "      <entry name='product'>None</entry>")?;
    writeln!(x, "      <entry name='uuid'>{vm_uuid}</entry>")?;
    writeln!(x, "      <entry name='family'>KubeVirt</entry>")?;
    writeln!(x, "    </system>")?;
    writeln!(x, "  </sysinfo>")?;

    let efi = rng.gen_bool(0.5);
    writeln!(x, "  <os>")?;
    writeln!(x, "    <type arch='x86_64' machine='pc-q35-8.1'>hvm</type>")?;
    if efi {
        writeln!(x, "    <loader readonly='yes' secure='no' type='pflash'>/usr/share/OVMF/OVMF_CODE.fd</loader>")?;
        writeln!(x, "    <nvram template='/usr/share/OVMF/OVMF_VARS.fd'>/var/run/kubevirt-private/libvirt/qemu/nvram/{name}_VARS.fd</nvram>")?;
    }
    writeln!(x, "    <boot dev='hd'/>")?;
    writeln!(x, "    <smbios mode='sysinfo'/>")?;
    writeln!(x, "  </os>")?;

    writeln!(x, "  <features>")?;
    writeln!(x, "    <acpi/>")?;
    if rng.gen_bool(0.3) {
        writeln!(x, "    <hyperv mode='custom'>")?;
        writeln!(x, "      <relaxed state='on'/>")?;
        writeln!(x, "      <vapic state='on'/>")?;
        writeln!(x, "      <spinlocks state='on' retries='8191'/>")?;
        writeln!(x, "      <vpindex state='on'/>")?;
        writeln!(x, "      <synic state='on'/>")?;
        writeln!(x, "    </hyperv>")?;
    }
    writeln!(x, "    <vmport state='off'/>")?;
    if efi {
        writeln!(x, "    <smm state='on'/>")?;
    }
    writeln!(x, "  </features>")?;

    let sockets = 1;
    let threads = if vcpus > 1 { 2 } else { 1 };
    writeln!(x, "  <cpu mode='host-model' check='partial'>")?;
    writeln!(
        x,
        "    <topology sockets='{sockets}' dies='1' cores='{}' threads='{threads}'/>",
        vcpus / threads
    )?;
    let mut features = CPU_FEATURES.to_vec();
    features.shuffle(rng);
    for feature in features.iter().take(rng.gen_range(0..=8)) {
        writeln!(x, "    <feature policy='require' name='{feature}'/>")?;
    }
    writeln!(x, "  </cpu>")?;

    writeln!(x, "  <clock offset='utc'>")?;
    writeln!(x, "    <timer name='rtc' tickpolicy='catchup'/>")?;
    writeln!(x, "    <timer name='pit' tickpolicy='delay'/>")?;
    writeln!(x, "    <timer name='hpet' present='no'/>")?;
    writeln!(x, "  </clock>")?;
    writeln!(x, "  <on_poweroff>destroy</on_poweroff>")?;
    writeln!(x, "  <on_reboot>restart</on_reboot>")?;
    writeln!(x, "  <on_crash>destroy</on_crash>")?;

    writeln!(x, "  <devices>")?;
    writeln!(x, "    <emulator>/usr/libexec/qemu-kvm</emulator>")?;
    write_devices(x, rng, &name)?;
    writeln!(x, "  </devices>")?;
    writeln!(x, "</domain>")
}

fn write_devices(x: &mut String, rng: &mut ChaCha8Rng, name: &str) -> std::fmt::Result {
    let mut pci_bus = 1u32;

    let disks = rng.gen_range(1..=6u32);
    for i in 0..disks {
        let bus = pick(rng, DISK_BUSES);
        let letter = char::from(b'a' + i as u8);
        let prefix = if bus == "virtio" { "vd" } else { "sd" };
        writeln!(x, "    <disk type='file' device='disk'>")?;
        writeln!(x, "      <driver name='qemu' type='raw' cache='none' error_policy='stop' discard='unmap'/>")?;
        writeln!(x, "      <source file='/var/run/kubevirt-private/vmi-disks/disk{i}/disk.img' index='{}'/>", disks - i)?;
        writeln!(x, "      <backingStore/>")?;
        writeln!(x, "      <target dev='{prefix}{letter}' bus='{bus}'/>")?;
        if i == 0 {
            writeln!(x, "      <boot order='1'/>")?;
        }
        writeln!(x, "      <alias name='ua-disk{i}'/>")?;
        if bus == "virtio" {
            writeln!(x, "      <address type='pci' domain='0x0000' bus='0x{pci_bus:02x}' slot='0x00' function='0x0'/>")?;
            pci_bus += 1;
        } else {
            writeln!(x, "      <address type='drive' controller='0' bus='0' target='0' unit='{i}'/>")?;
        }
        writeln!(x, "    </disk>")?;
    }

    writeln!(x, "    <controller type='usb' index='0' model='none'>")?;
    writeln!(x, "      <alias name='usb'/>")?;
    writeln!(x, "    </controller>")?;
    writeln!(x, "    <controller type='scsi' index='0' model='virtio-non-transitional'>")?;
    writeln!(x, "      <alias name='scsi0'/>")?;
    writeln!(x, "    </controller>")?;
    writeln!(x, "    <controller type='virtio-serial' index='0' model='virtio-non-transitional'>")?;
    writeln!(x, "      <alias name='virtio-serial0'/>")?;
    writeln!(x, "    </controller>")?;
    writeln!(x, "    <controller type='pci' index='0' model='pcie-root'>")?;
    writeln!(x, "      <alias name='pcie.0'/>")?;
    writeln!(x, "    </controller>")?;
    for port in 1..=rng.gen_range(4..=14u32) {
        writeln!(x, "    <controller type='pci' index='{port}' model='pcie-root-port'>")?;
        writeln!(x, "      <model name='pcie-root-port'/>")?;
        writeln!(x, "      <target chassis='{port}' port='0x{:x}'/>", 0x10 + port - 1)?;
        writeln!(x, "      <alias name='pci.{port}'/>")?;
        writeln!(x, "    </controller>")?;
    }

    for i in 0..rng.gen_range(1..=4u32) {
        writeln!(x, "    <interface type='ethernet'>")?;
        writeln!(
            x,
            "      <mac address='52:54:00:{:02x}:{:02x}:{:02x}'/>",
            rng.gen::<u8>(),
            rng.gen::<u8>(),
            rng.gen::<u8>()
        )?;
        writeln!(x, "      <target dev='tap{i}' managed='no'/>")?;
        writeln!(x, "      <model type='{}'/>", pick(rng, NIC_MODELS))?;
        writeln!(x, "      <mtu size='1480'/>")?;
        writeln!(x, "      <alias name='ua-net{i}'/>")?;
        writeln!(x, "      <rom enabled='no'/>")?;
        writeln!(x, "      <address type='pci' domain='0x0000' bus='0x{pci_bus:02x}' slot='0x00' function='0x0'/>")?;
        writeln!(x, "    </interface>")?;
        pci_bus += 1;
    }

    writeln!(x, "    <serial type='unix'>")?;
    writeln!(x, "      <source mode='bind' path='/var/run/kubevirt-private/virt-serial0'/>")?;
    writeln!(x, "      <target type='isa-serial' port='0'>")?;
    writeln!(x, "        <model name='isa-serial'/>")?;
    writeln!(x, "      </target>")?;
    writeln!(x, "      <alias name='serial0'/>")?;
    writeln!(x, "    </serial>")?;
    writeln!(x, "    <console type='unix'>")?;
    writeln!(x, "      <source mode='bind' path='/var/run/kubevirt-private/virt-serial0'/>")?;
    writeln!(x, "      <target type='serial' port='0'/>")?;
    writeln!(x, "      <alias name='serial0'/>")?;
    writeln!(x, "    </console>")?;
    writeln!(x, "    <channel type='unix'>")?;
    writeln!(x, "      <source mode='bind' path='/var/run/libvirt/qemu/run/channel/{name}/org.qemu.guest_agent.0'/>")?;
    writeln!(x, "      <target type='virtio' name='org.qemu.guest_agent.0' state='disconnected'/>")?;
    writeln!(x, "      <alias name='channel0'/>")?;
    writeln!(x, "    </channel>")?;

    writeln!(x, "    <input type='mouse' bus='ps2'>")?;
    writeln!(x, "      <alias name='input0'/>")?;
    writeln!(x, "    </input>")?;
    writeln!(x, "    <input type='keyboard' bus='ps2'>")?;
    writeln!(x, "      <alias name='input1'/>")?;
    writeln!(x, "    </input>")?;
    writeln!(x, "    <graphics type='vnc' port='-1' autoport='yes'>")?;
    writeln!(x, "      <listen type='socket' socket='/var/run/kubevirt-private/vnc.sock'/>")?;
    writeln!(x, "    </graphics>")?;
    writeln!(x, "    <video>")?;
    writeln!(x, "      <model type='vga' vram='16384' heads='1' primary='yes'/>")?;
    writeln!(x, "      <alias name='video0'/>")?;
    writeln!(x, "    </video>")?;

    for i in 0..rng.gen_range(0..=2u32) {
        writeln!(x, "    <hostdev mode='subsystem' type='pci' managed='no'>")?;
        writeln!(x, "      <source>")?;
        writeln!(x, "        <address domain='0x0000' bus='0x{:02x}' slot='0x00' function='0x{i:x}'/>", 0x3b + i)?;
        writeln!(x, "      </source>")?;
        writeln!(x, "      <alias name='ua-hostdevice-gpu{i}'/>")?;
        writeln!(x, "      <address type='pci' domain='0x0000' bus='0x{pci_bus:02x}' slot='0x00' function='0x0'/>")?;
        writeln!(x, "    </hostdev>")?;
        pci_bus += 1;
    }

    writeln!(x, "    <memballoon model='virtio-non-transitional' freePageReporting='on'>")?;
    writeln!(x, "      <stats period='10'/>")?;
    writeln!(x, "      <alias name='balloon0'/>")?;
    writeln!(x, "      <address type='pci' domain='0x0000' bus='0x{pci_bus:02x}' slot='0x00' function='0x0'/>")?;
    writeln!(x, "    </memballoon>")?;
    pci_bus += 1;

    if rng.gen_bool(0.5) {
        writeln!(x, "    <rng model='virtio-non-transitional'>")?;
        writeln!(x, "      <backend model='random'>/dev/urandom</backend>")?;
        writeln!(x, "      <alias name='rng0'/>")?;
        writeln!(x, "      <address type='pci' domain='0x0000' bus='0x{pci_bus:02x}' slot='0x00' function='0x0'/>")?;
        writeln!(x, "    </rng>")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainSchema, Primary, Secondary};
    use tempfile::tempdir;

    #[test]
    fn test_deterministic_generation() {
        for index in 0..4 {
            assert_eq!(generate_domain(7, index), generate_domain(7, index));
        }
    }

    #[test]
    fn test_seed_changes_output() {
        assert_ne!(generate_domain(1, 0), generate_domain(2, 0));
    }

    #[test]
    fn test_documents_decode_under_both_schemas() {
        for index in 0..32 {
            let xml = generate_domain(2026, index);
            let libvirt = Primary::decode(xml.as_bytes()).unwrap();
            let kubevirt = Secondary::decode(xml.as_bytes()).unwrap();

            assert_eq!(libvirt.name, kubevirt.name);
            let disks = libvirt.devices.as_deref().map_or(0, |d| d.disks.len());
            assert_eq!(disks, kubevirt.devices.disks.len());
            assert!(disks >= 1);
        }
    }

    #[test]
    fn test_write_corpus() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("corpus");
        let config = GenerateConfig { count: 3, seed: 9 };

        let written = write_corpus(&out, &config).unwrap();

        assert_eq!(written.len(), 3);
        assert_eq!(written[2], out.join("domain_0002.xml"));
        let on_disk = fs::read_to_string(&written[1]).unwrap();
        assert_eq!(on_disk, generate_domain(9, 1));
    }
}
